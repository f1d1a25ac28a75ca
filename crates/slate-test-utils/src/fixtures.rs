//! Reusable container fixtures.
//!
//! The payroll dataset is small enough to reason about by hand and has both
//! repeated keys (two people on 27000, three on 47000) and singletons.

/// Salary and name.
pub type Employee = (u32, &'static str);

/// The payroll, in hiring order.
pub fn employees() -> Vec<Employee> {
    vec![
        (27000, "Dave"),
        (27000, "Jim"),
        (99000, "BigBoss"),
        (47000, "Gail"),
        (15000, "Dumb"),
        (47000, "Barbara"),
        (47000, "Mary"),
    ]
}

/// The first four hires only, before any duplicate 47000 salaries.
pub fn founding_employees() -> Vec<Employee> {
    employees().into_iter().take(4).collect()
}

/// Keys `0, step, 2*step, ..` below `n * step`, ascending.
pub fn stepped_keys(n: u32, step: u32) -> Vec<u32> {
    (0..n).map(|i| i * step).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payroll_has_duplicate_runs() {
        let all = employees();
        assert_eq!(all.iter().filter(|e| e.0 == 47000).count(), 3);
        assert_eq!(all.iter().filter(|e| e.0 == 27000).count(), 2);
    }

    #[test]
    fn founders_are_a_prefix() {
        assert_eq!(founding_employees(), employees()[..4].to_vec());
    }

    #[test]
    fn stepped_keys_ascend() {
        assert_eq!(stepped_keys(4, 3), vec![0, 3, 6, 9]);
    }
}
