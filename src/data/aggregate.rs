use std::collections::HashMap;
use std::hash::Hash;

/// Arithmetic mean, `None` for an empty input.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Mean truncated toward zero to whole currency units.
pub fn truncated_mean<I>(values: I) -> Option<i64>
where
    I: IntoIterator<Item = f64>,
{
    mean(values).map(|m| m.trunc() as i64)
}

/// Group `rows` by `key` and average `value` within each group.
///
/// Groups come back in the order their key was first encountered.
pub fn group_mean<T, K, FK, FV>(rows: &[T], key: FK, value: FV) -> Vec<(K, f64)>
where
    K: Eq + Hash + Clone,
    FK: Fn(&T) -> K,
    FV: Fn(&T) -> f64,
{
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, f64, usize)> = Vec::new();

    for row in rows {
        let k = key(row);
        let v = value(row);
        match slots.get(&k) {
            Some(&slot) => {
                let group = &mut groups[slot];
                group.1 += v;
                group.2 += 1;
            }
            None => {
                slots.insert(k.clone(), groups.len());
                groups.push((k, v, 1));
            }
        }
    }

    groups
        .into_iter()
        .map(|(k, sum, count)| (k, sum / count as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(std::iter::empty()), None);
        assert_eq!(truncated_mean(Vec::new()), None);
    }

    #[test]
    fn test_truncated_mean_floors() {
        assert_eq!(truncated_mean([1.0, 2.0]), Some(1));
        assert_eq!(truncated_mean([100_000.0, 100_001.0, 100_001.0]), Some(100_000));
    }

    #[test]
    fn test_group_mean_first_encounter_order() {
        let rows = [("b", 2.0), ("a", 1.0), ("b", 4.0)];
        let groups = group_mean(&rows, |r| r.0, |r| r.1);
        assert_eq!(groups, vec![("b", 3.0), ("a", 1.0)]);
    }
}
