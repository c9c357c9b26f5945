use std::sync::Mutex;

use crate::{Core, Error};

/// Producer-backed core: a locked slot filled at most once by the promise
/// side and drained at most once by `get`.
#[derive(Debug)]
pub struct ValueCore<T> {
    slot: Mutex<Slot<T>>,
}

#[derive(Debug)]
enum Slot<T> {
    Empty,
    Ready(T),
    Taken,
}

impl<T> ValueCore<T> {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(Slot::Empty),
        }
    }

    /// Fills the slot. The slot is one-shot: a second call fails with
    /// [`Error::AlreadySet`], even after the value has been read back out.
    pub fn set_value(&self, value: T) -> Result<(), Error> {
        let mut slot = self.slot.lock().unwrap();
        match *slot {
            Slot::Empty => {
                *slot = Slot::Ready(value);
                Ok(())
            }
            Slot::Ready(_) | Slot::Taken => Err(Error::AlreadySet),
        }
    }
}

impl<T> Default for ValueCore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send> Core<T> for ValueCore<T> {
    /// Drains the slot. This is a single immediate check: an empty slot
    /// fails with [`Error::ValueNotSet`] rather than waiting for the
    /// producer, and the caller is free to try again later.
    fn get(&self) -> Result<T, Error> {
        let mut slot = self.slot.lock().unwrap();
        match std::mem::replace(&mut *slot, Slot::Taken) {
            Slot::Ready(value) => Ok(value),
            Slot::Taken => Err(Error::ValueNotSet),
            Slot::Empty => {
                // Leave the slot untouched so the producer can still deliver.
                *slot = Slot::Empty;
                Err(Error::ValueNotSet)
            }
        }
    }
}
