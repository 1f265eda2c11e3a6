use rand::seq::SliceRandom;
use rand::Rng;

use crate::competition::CompetitionData;

/// Fallback judges, drawn front to back
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExperiencedPool {
    names: Vec<String>,
}

/// Position of one group's scan through the pool
///
/// Skipped candidates stay in the pool, so each is inspected at most once
/// per group.
#[derive(Debug, Clone, Copy, Default)]
pub struct PoolCursor(usize);

impl ExperiencedPool {
    #[cfg(test)]
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Experienced, non-delegate competitors in schedule order, shuffled once
    pub fn build<R: Rng + ?Sized>(
        competitors: &[String],
        competition: &CompetitionData,
        starting_year: u32,
        rng: &mut R,
    ) -> Self {
        let mut names: Vec<String> = competitors
            .iter()
            .filter(|name| competition.is_experienced(name, starting_year))
            .cloned()
            .collect();
        names.shuffle(rng);
        Self { names }
    }

    /// Removes and returns the first candidate at or after the cursor that
    /// `admits` accepts; rejected candidates are passed over.
    pub fn draw<F>(&mut self, cursor: &mut PoolCursor, mut admits: F) -> Option<String>
    where
        F: FnMut(&str) -> bool,
    {
        while cursor.0 < self.names.len() {
            if admits(&self.names[cursor.0]) {
                return Some(self.names.remove(cursor.0));
            }
            cursor.0 += 1;
        }
        None
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[cfg(test)]
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn pool(names: &[&str]) -> ExperiencedPool {
        ExperiencedPool::new(names.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_draw_takes_front_first() {
        let mut pool = pool(&["A", "B", "C"]);
        let mut cursor = PoolCursor::default();
        assert_eq!(pool.draw(&mut cursor, |_| true).as_deref(), Some("A"));
        assert_eq!(pool.draw(&mut cursor, |_| true).as_deref(), Some("B"));
        assert_eq!(pool.names(), &["C".to_string()]);
    }

    #[test]
    fn test_skipped_candidates_stay() {
        let mut pool = pool(&["A", "B", "C"]);
        let mut cursor = PoolCursor::default();
        assert_eq!(pool.draw(&mut cursor, |n| n == "B").as_deref(), Some("B"));
        assert_eq!(pool.names(), &["A".to_string(), "C".to_string()]);

        // a new scan sees A again
        let mut cursor = PoolCursor::default();
        assert_eq!(pool.draw(&mut cursor, |_| true).as_deref(), Some("A"));
    }

    #[test]
    fn test_each_candidate_inspected_once_per_scan() {
        let mut pool = pool(&["A", "B", "C"]);
        let mut cursor = PoolCursor::default();
        let mut inspected = Vec::new();
        let drawn = pool.draw(&mut cursor, |n| {
            inspected.push(n.to_string());
            false
        });
        assert_eq!(drawn, None);
        assert_eq!(inspected, vec!["A", "B", "C"]);

        // an exhausted cursor stays exhausted
        assert_eq!(pool.draw(&mut cursor, |_| true), None);
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn test_empty_pool() {
        let mut pool = ExperiencedPool::default();
        assert!(pool.is_empty());
        assert_eq!(pool.draw(&mut PoolCursor::default(), |_| true), None);
    }

    #[test]
    fn test_build_filters_and_shuffles() {
        let mut competition = CompetitionData::default();
        competition.registration_years.insert("Old".to_string(), 2010);
        competition.registration_years.insert("Older".to_string(), 2005);
        competition.registration_years.insert("New".to_string(), 2023);
        competition.registration_years.insert("Delegate".to_string(), 2009);
        competition.delegates.insert("Delegate".to_string());

        let competitors: Vec<String> = ["Old", "New", "Delegate", "Older", "Unknown"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let pool = ExperiencedPool::build(&competitors, &competition, 2020, &mut ChaCha8Rng::seed_from_u64(1));

        let mut names = pool.names().to_vec();
        names.sort();
        assert_eq!(names, vec!["Old", "Older"]);
    }
}
