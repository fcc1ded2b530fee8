/// Stable address of a node inside an [`Arena`].
///
/// The generation distinguishes the current occupant of a slot from
/// earlier occupants that have since been released.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    #[inline]
    fn to_index(self) -> usize {
        self.index as usize
    }
}

#[derive(Clone)]
struct Slot<T> {
    generation: u32,
    element: Option<T>,
}

#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub(crate) fn alloc(&mut self, element: T) -> NodeId {
        if let Some(index) = self.free.pop() {
            // Reuse a released slot; its generation was bumped on release.
            let slot = &mut self.slots[index as usize];
            debug_assert!(slot.element.is_none());
            slot.element = Some(element);
            NodeId {
                index,
                generation: slot.generation,
            }
        } else {
            assert!(
                self.slots.len() < u32::MAX as usize,
                "`Arena::alloc()` - arena is at maximum capacity"
            );
            self.slots.push(Slot {
                generation: 0,
                element: Some(element),
            });
            NodeId {
                index: (self.slots.len() - 1) as u32,
                generation: 0,
            }
        }
    }

    /// Returns whether `id` still refers to the element it was issued for.
    #[inline]
    pub(crate) fn contains(&self, id: NodeId) -> bool {
        match self.slots.get(id.to_index()) {
            Some(slot) => slot.generation == id.generation && slot.element.is_some(),
            None => false,
        }
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> &T {
        let slot = &self.slots[id.to_index()];
        debug_assert_eq!(slot.generation, id.generation, "`Arena::get()` - stale id");
        slot.element
            .as_ref()
            .expect("`Arena::get()` - `id` is invalid!")
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut T {
        let slot = &mut self.slots[id.to_index()];
        debug_assert_eq!(slot.generation, id.generation, "`Arena::get_mut()` - stale id");
        slot.element
            .as_mut()
            .expect("`Arena::get_mut()` - `id` is invalid!")
    }

    /// Releases the element behind `id`. Every copy of `id` becomes stale.
    pub(crate) fn take(&mut self, id: NodeId) -> T {
        let slot = &mut self.slots[id.to_index()];
        debug_assert_eq!(slot.generation, id.generation, "`Arena::take()` - stale id");
        let element = slot
            .element
            .take()
            .expect("`Arena::take()` - `id` is invalid!");
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        element
    }
}
