use super::*;
use pretty_assertions::assert_eq;

fn ids(raw: &[u32]) -> Vec<ClassId> {
    raw.iter().copied().map(ClassId::new).collect()
}

#[test]
fn insert_deduplicates_and_keeps_order() {
    let mut set = CandidateSet::new();
    assert!(set.is_empty());
    assert!(set.insert(ClassId::new(3)));
    assert!(set.insert(ClassId::new(1)));
    assert!(!set.insert(ClassId::new(3)));
    assert!(set.insert(ClassId::new(2)));

    assert_eq!(set.len(), 3);
    assert!(set.contains(ClassId::new(1)));
    assert!(!set.contains(ClassId::new(0)));
    assert_eq!(set.as_slice(), ids(&[3, 1, 2]).as_slice());
}

#[test]
fn equality_ignores_order() {
    let forward: CandidateSet = ids(&[1, 2, 3]).into_iter().collect();
    let backward: CandidateSet = ids(&[3, 2, 1]).into_iter().collect();
    assert_eq!(forward, backward);

    let fewer: CandidateSet = ids(&[1, 2]).into_iter().collect();
    assert_ne!(forward, fewer);
}

#[test]
fn extend_skips_existing() {
    let mut set: CandidateSet = ids(&[1]).into_iter().collect();
    set.extend(ids(&[2, 1, 4, 2]));
    assert_eq!(set.into_vec(), ids(&[1, 2, 4]));
}

#[test]
fn clear_empties_both_views() {
    let mut set: CandidateSet = ids(&[5, 6]).into_iter().collect();
    set.clear();
    assert!(set.is_empty());
    assert!(!set.contains(ClassId::new(5)));
    assert!(set.insert(ClassId::new(5)));
}

#[test]
fn iterates_in_insertion_order() {
    let set: CandidateSet = ids(&[9, 4, 7]).into_iter().collect();
    let borrowed: Vec<u32> = (&set).into_iter().map(|id| id.raw()).collect();
    assert_eq!(borrowed, vec![9, 4, 7]);
    let owned: Vec<ClassId> = set.into_iter().collect();
    assert_eq!(owned, ids(&[9, 4, 7]));
}
