//! Most-recent-first list of previously used programs.

use crate::error::CalcError;
use crate::program::Program;

pub const DEFAULT_CAPACITY: usize = 5;

/// A bounded, de-duplicated list of programs, newest first.
///
/// This is the shape the host persists; where it is stored is up to the host.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramHistory {
    capacity: usize,
    programs: Vec<Program>,
}

impl Default for ProgramHistory {
    fn default() -> Self {
        Self::bounded(DEFAULT_CAPACITY)
    }
}

impl ProgramHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bounded(capacity: usize) -> Self {
        ProgramHistory {
            capacity,
            programs: Vec::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Moves `program` to the front. Empty programs are not stored.
    ///
    /// Returns whether the history changed.
    pub fn save(&mut self, program: Program) -> bool {
        if program.is_empty() {
            return false;
        }
        if let Some(index) = self.programs.iter().position(|p| *p == program) {
            if index == 0 {
                return false;
            }
            self.programs.remove(index);
        }
        self.programs.insert(0, program);
        self.programs.truncate(self.capacity);
        true
    }

    pub fn remove(&mut self, index: usize) -> Result<Program, CalcError> {
        if index >= self.programs.len() {
            return Err(CalcError::OutOfBounds(index));
        }
        Ok(self.programs.remove(index))
    }

    pub fn latest(&self) -> Option<&Program> {
        self.programs.first()
    }

    pub fn get(&self, index: usize) -> Option<&Program> {
        self.programs.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Program> {
        self.programs.iter()
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    /// Encodes the list as a JSON array of programs.
    pub fn to_json(&self) -> Result<String, CalcError> {
        Ok(serde_json::to_string(&self.programs)?)
    }

    /// Decodes a list written by [`to_json`](Self::to_json). Empty and
    /// duplicate entries are dropped and the list is cut to `capacity`.
    pub fn from_json(json: &str, capacity: usize) -> Result<Self, CalcError> {
        let stored: Vec<Program> = serde_json::from_str(json)?;
        let mut history = Self::bounded(capacity);
        for program in stored {
            if history.programs.len() == capacity {
                break;
            }
            if !program.is_empty() && !history.programs.contains(&program) {
                history.programs.push(program);
            }
        }
        Ok(history)
    }
}
