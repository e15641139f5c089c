use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame
///   allocation once warmed
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a draw command with the given z-index.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
        });

        self.sorted_dirty = true;
    }

    /// Iterates items in paint order (back-to-front) without cloning commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    fn z(list: &mut DrawList) -> Vec<i32> {
        list.iter_in_paint_order().map(|it| it.key.z.0).collect()
    }

    #[test]
    fn paint_order_sorts_by_z() {
        let mut list = DrawList::new();
        list.push_solid_circle(ZIndex::new(2), Vec2::zero(), 1.0, Color::transparent());
        list.push_solid_circle(ZIndex::new(0), Vec2::zero(), 1.0, Color::transparent());
        list.push_solid_circle(ZIndex::new(1), Vec2::zero(), 1.0, Color::transparent());
        assert_eq!(z(&mut list), vec![0, 1, 2]);
    }

    #[test]
    fn equal_z_keeps_insertion_order() {
        let mut list = DrawList::new();
        for i in 0..4 {
            list.push_solid_circle(ZIndex::new(7), Vec2::new(i as f32, 0.0), 1.0, Color::transparent());
        }

        let xs: Vec<f32> = list
            .iter_in_paint_order()
            .map(|it| match &it.cmd {
                DrawCmd::Circle(c) => c.center.x,
                _ => panic!("expected circle"),
            })
            .collect();

        assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn clear_resets_order_counter() {
        let mut list = DrawList::new();
        list.push_solid_circle(ZIndex::new(0), Vec2::zero(), 1.0, Color::transparent());
        list.clear();
        assert!(list.is_empty());

        list.push_solid_circle(ZIndex::new(0), Vec2::zero(), 1.0, Color::transparent());
        assert_eq!(list.items()[0].key.order, 0);
    }
}
