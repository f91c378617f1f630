//! Queue mutations shared by every engine implementation.
//!
//! Both helpers keep `current` pointing at the same entry it did before the
//! edit, or clear it when that entry is removed.

/// Move `queue[from]` so it ends up at index `to`.
pub fn move_entry<T>(queue: &mut Vec<T>, current: &mut Option<usize>, from: usize, to: usize) -> bool {
    if from >= queue.len() || to >= queue.len() || from == to {
        return false;
    }

    let item = queue.remove(from);
    queue.insert(to, item);

    if let Some(cur) = *current {
        *current = Some(if cur == from {
            to
        } else if from < cur && to >= cur {
            cur - 1
        } else if from > cur && to <= cur {
            cur + 1
        } else {
            cur
        });
    }
    true
}

/// Remove `queue[index]`, returning it.
pub fn delete_entry<T>(queue: &mut Vec<T>, current: &mut Option<usize>, index: usize) -> Option<T> {
    if index >= queue.len() {
        return None;
    }

    let removed = queue.remove(index);
    *current = match *current {
        Some(cur) if cur == index => None,
        Some(cur) if cur > index => Some(cur - 1),
        other => other,
    };
    Some(removed)
}
