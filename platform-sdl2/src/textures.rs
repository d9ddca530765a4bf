// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use platform_abstraction_layer::TextureRef;

use crate::EngineError;

struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

/// Owns values (textures, in practice) on behalf of [`TextureRef`] handles.
///
/// The low 32 bits of a handle are the slot index, the high 32 bits are the
/// generation of the slot when the handle was created. Removing a value bumps
/// its slot's generation, so handles to destroyed textures never alias
/// textures created later in the same slot.
pub(crate) struct TextureSlots<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
}

impl<T> TextureSlots<T> {
    pub fn new() -> TextureSlots<T> {
        TextureSlots {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub fn insert(&mut self, value: T) -> TextureRef {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.value = Some(value);
            return handle(index, slot.generation);
        }
        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            value: Some(value),
        });
        handle(index, 0)
    }

    pub fn get(&self, texture: TextureRef) -> Result<&T, EngineError> {
        let (index, generation) = split(texture);
        self.slots
            .get(index as usize)
            .filter(|slot| slot.generation == generation)
            .and_then(|slot| slot.value.as_ref())
            .ok_or(EngineError::InvalidTexture(texture))
    }

    pub fn get_mut(&mut self, texture: TextureRef) -> Result<&mut T, EngineError> {
        let (index, generation) = split(texture);
        self.slots
            .get_mut(index as usize)
            .filter(|slot| slot.generation == generation)
            .and_then(|slot| slot.value.as_mut())
            .ok_or(EngineError::InvalidTexture(texture))
    }

    pub fn remove(&mut self, texture: TextureRef) -> Option<T> {
        let (index, generation) = split(texture);
        let slot = self.slots.get_mut(index as usize)?;
        if slot.generation != generation {
            return None;
        }
        let value = slot.value.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(index);
        Some(value)
    }

    /// Removes every value, invalidating all handles.
    pub fn drain(&mut self) -> Vec<T> {
        self.free.clear();
        let mut values = Vec::new();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if let Some(value) = slot.value.take() {
                values.push(value);
            }
            slot.generation = slot.generation.wrapping_add(1);
            self.free.push(index as u32);
        }
        values
    }

    /// The amount of live values.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }
}

fn handle(index: u32, generation: u32) -> TextureRef {
    TextureRef::new((generation as u64) << 32 | index as u64)
}

fn split(texture: TextureRef) -> (u32, u32) {
    let inner = texture.inner();
    (inner as u32, (inner >> 32) as u32)
}

#[cfg(test)]
mod tests {
    use super::TextureSlots;
    use crate::EngineError;

    #[test]
    fn insert_get_remove() {
        let mut slots = TextureSlots::new();
        let a = slots.insert("a");
        let b = slots.insert("b");
        assert_eq!(2, slots.len());
        assert_eq!("a", *slots.get(a).unwrap());
        *slots.get_mut(b).unwrap() = "c";
        assert_eq!(Some("c"), slots.remove(b));
        assert_eq!(None, slots.remove(b));
        assert_eq!(1, slots.len());
    }

    #[test]
    fn stale_handles_do_not_alias_reused_slots() {
        let mut slots = TextureSlots::new();
        let old = slots.insert(1);
        slots.remove(old);
        let new = slots.insert(2);
        assert_ne!(old, new);
        assert!(matches!(
            slots.get(old),
            Err(EngineError::InvalidTexture(handle)) if handle == old
        ));
        assert_eq!(2, *slots.get(new).unwrap());
    }

    #[test]
    fn drain_empties_everything() {
        let mut slots = TextureSlots::new();
        let a = slots.insert(1);
        slots.insert(2);
        let c = slots.insert(3);
        slots.remove(c);
        let mut drained = slots.drain();
        drained.sort();
        assert_eq!(vec![1, 2], drained);
        assert_eq!(0, slots.len());
        assert!(slots.get(a).is_err());
        let d = slots.insert(4);
        assert_eq!(4, *slots.get(d).unwrap());
    }
}
