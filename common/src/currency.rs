/// Fixed demo conversion rate: 1 USD = 75 INR.
pub const INR_PER_USD: u64 = 75;

/// Convert a USD amount in cents to paise at the fixed demo rate.
pub fn usd_cents_to_paise(cents: u64) -> u64 {
    cents * INR_PER_USD
}

/// Format an amount in paise as rupees with en-IN digit grouping:
/// the last three integer digits form one group, the rest pair up
/// (₹1,23,456.78).
pub fn format_inr(paise: u64) -> String {
    let rupees = paise / 100;
    let fraction = paise % 100;
    format!("₹{}.{fraction:02}", group_indian(rupees))
}

fn group_indian(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (mut head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = vec![tail.to_string()];
    while head.len() > 2 {
        let (rest, pair) = head.split_at(head.len() - 2);
        groups.push(pair.to_string());
        head = rest;
    }
    groups.push(head.to_string());
    groups.reverse();
    groups.join(",")
}
