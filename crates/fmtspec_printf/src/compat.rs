//! Checking that two format strings expect the same arguments
//!
//! A translated string must consume the same arguments, with the same types, as the string it
//! was translated from, although positional references may reorder them. Keys of externally
//! resolved specifiers are compared as a set.
//!

use bon::Builder;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::types::{Arg, ArgType, Size, Spec};

/// Options for how signatures are built and compared
#[derive(Debug, Clone, Copy, Builder)]
pub struct CompareOptions {
    /// Treat `%d` and `%ld` as different arguments
    #[builder(default = true)]
    pub strict_size: bool,

    /// Compare the dictionary keys referenced by the strings
    #[builder(default = true)]
    pub check_keys: bool,
}

impl Default for CompareOptions {
    fn default() -> Self {
        CompareOptions::builder().build()
    }
}

/// Argument expected at a position of the argument list
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot {
    pub arg_type: ArgType,
    pub size: Size,
}

impl Slot {
    const WIDTH: Slot = Slot {
        arg_type: ArgType::Integer,
        size: Size::Default,
    };

    fn matches(&self, other: &Slot, options: &CompareOptions) -> bool {
        self.arg_type == other.arg_type && (!options.strict_size || self.size == other.size)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.size.bytes() {
            Some(bytes) => write!(f, "{} ({} bytes)", self.arg_type, bytes),
            None => write!(f, "{}", self.arg_type),
        }
    }
}

/// The arguments and keys a format string expects
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signature {
    slots: BTreeMap<usize, Slot>,
    keys: BTreeSet<String>,
    conflicts: BTreeSet<usize>,
}

impl Signature {
    /// Resolve the argument list expected by `specs`.
    pub fn new(specs: &[Spec], options: &CompareOptions) -> Signature {
        let mut signature = Signature::default();
        let mut next = 0usize;

        for spec in specs {
            if let Some(key) = &spec.config_key {
                signature.keys.insert(key.clone());
            }

            for arg in [spec.width, spec.precision].into_iter().flatten() {
                match arg {
                    Arg::Value(_) => {}
                    Arg::Index(index) => signature.record(usize::from(index), Slot::WIDTH, options),
                    Arg::Next => {
                        signature.record(next, Slot::WIDTH, options);
                        next += 1;
                    }
                }
            }

            if !spec.consumes_argument() {
                continue;
            }

            let slot = Slot {
                arg_type: spec.arg_type,
                size: spec.size,
            };
            match spec.main_arg_num {
                Some(index) => signature.record(usize::from(index), slot, options),
                None => {
                    signature.record(next, slot, options);
                    next += 1;
                }
            }
        }

        signature
    }

    fn record(&mut self, position: usize, slot: Slot, options: &CompareOptions) {
        match self.slots.get(&position) {
            Some(existing) if !existing.matches(&slot, options) => {
                self.conflicts.insert(position);
            }
            Some(_) => {}
            None => {
                self.slots.insert(position, slot);
            }
        }
    }

    /// Number of arguments, counting gaps left by positional references
    pub fn arity(&self) -> usize {
        self.slots.keys().next_back().map_or(0, |last| last + 1)
    }

    /// Expected argument at a 0-based position
    pub fn slot(&self, position: usize) -> Option<&Slot> {
        self.slots.get(&position)
    }

    pub fn keys(&self) -> &BTreeSet<String> {
        &self.keys
    }

    /// Positions used twice with different types
    pub fn conflicts(&self) -> &BTreeSet<usize> {
        &self.conflicts
    }
}

/// A difference between two signatures
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Mismatch {
    /// Argument expected by the base string is never used
    MissingArgument(usize),

    /// Argument that the base string does not provide
    ExtraArgument(usize),

    TypeChanged {
        position: usize,
        expected: Slot,
        found: Slot,
    },

    /// Position used twice with different types
    Conflict(usize),

    MissingKey(String),
    ExtraKey(String),
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::MissingArgument(position) => {
                write!(f, "argument {} is not used", position + 1)
            }
            Mismatch::ExtraArgument(position) => {
                write!(f, "argument {} does not exist", position + 1)
            }
            Mismatch::TypeChanged {
                position,
                expected,
                found,
            } => write!(
                f,
                "argument {} expected {} but found {}",
                position + 1,
                expected,
                found
            ),
            Mismatch::Conflict(position) => {
                write!(f, "argument {} is used with different types", position + 1)
            }
            Mismatch::MissingKey(key) => write!(f, "key '{}' is not used", key),
            Mismatch::ExtraKey(key) => write!(f, "key '{}' does not exist", key),
        }
    }
}

/// Differences of `other` against `base`, sorted.
pub fn compare(base: &Signature, other: &Signature, options: &CompareOptions) -> Vec<Mismatch> {
    let mut result = Vec::new();

    for (position, expected) in &base.slots {
        match other.slots.get(position) {
            None => result.push(Mismatch::MissingArgument(*position)),
            Some(found) if !expected.matches(found, options) => {
                result.push(Mismatch::TypeChanged {
                    position: *position,
                    expected: *expected,
                    found: *found,
                })
            }
            Some(_) => {}
        }
    }

    other
        .slots
        .keys()
        .filter(|position| !base.slots.contains_key(position))
        .for_each(|position| result.push(Mismatch::ExtraArgument(*position)));

    other
        .conflicts
        .iter()
        .for_each(|position| result.push(Mismatch::Conflict(*position)));

    if options.check_keys {
        base.keys
            .difference(&other.keys)
            .for_each(|key| result.push(Mismatch::MissingKey(key.clone())));
        other
            .keys
            .difference(&base.keys)
            .for_each(|key| result.push(Mismatch::ExtraKey(key.clone())));
    }

    result.sort();
    result
}
