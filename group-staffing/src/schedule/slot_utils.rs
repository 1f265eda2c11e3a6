/// Concurrency key of a group label: its last whitespace-separated token
/// ("Red 1" -> "1")
pub fn slot_number(group: &str) -> &str {
    group.split_whitespace().last().unwrap_or("")
}

/// Whether two distinct group labels run at the same time
pub fn is_concurrent(a: &str, b: &str) -> bool {
    slot_number(a) == slot_number(b)
}

/// Splits the other groups of an event into (non-concurrent, concurrent)
/// relative to `group`. The group itself is in neither list.
pub fn classify_groups<'a, I>(group: &str, groups: I) -> (Vec<String>, Vec<String>)
where
    I: IntoIterator<Item = &'a String>,
{
    let mut non_concurrent = Vec::new();
    let mut concurrent = Vec::new();

    for other in groups {
        if other == group {
            continue;
        }
        if is_concurrent(group, other) {
            concurrent.push(other.clone());
        } else {
            non_concurrent.push(other.clone());
        }
    }

    (non_concurrent, concurrent)
}
