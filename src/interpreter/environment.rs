use crate::value::{RuntimeErrorKind, Value};
use compact_str::{CompactString, ToCompactString};
use std::collections::{HashMap, HashSet};

/// Numeric constants seeded into every fresh root scope, as `const`
/// bindings.
const NUMERIC_CONSTANTS: [(&str, f64); 7] = [
    ("pi", std::f64::consts::PI),
    ("tau", std::f64::consts::TAU),
    ("e", std::f64::consts::E),
    ("phi", 1.618_033_988_749_895),
    ("sqrt2", std::f64::consts::SQRT_2),
    ("ln2", std::f64::consts::LN_2),
    ("ln10", std::f64::consts::LN_10),
];

#[derive(Debug, Default)]
struct Frame {
    values: HashMap<CompactString, Value>,
    constants: HashSet<CompactString>,
    parent: Option<usize>,
}

/// The scope chain, stored as an arena of frames with parent indices.
///
/// The interpreter owns the arena top-to-bottom: entering a block pushes a
/// frame, leaving pops back to its parent. Frames are never shared, so a
/// fresh `Environment` per evaluation is all the isolation the engine needs.
#[derive(Debug)]
pub struct Environment {
    frames: Vec<Frame>,
    current: usize,
}

impl Environment {
    pub fn new() -> Self {
        let mut root = Frame::default();
        for (name, value) in NUMERIC_CONSTANTS {
            root.values
                .insert(name.to_compact_string(), Value::Real(value));
            root.constants.insert(name.to_compact_string());
        }
        Self {
            frames: vec![root],
            current: 0,
        }
    }

    pub fn push_scope(&mut self) {
        self.frames.push(Frame {
            parent: Some(self.current),
            ..Frame::default()
        });
        self.current = self.frames.len() - 1;
    }

    pub fn pop_scope(&mut self) {
        let parent = self.frames[self.current]
            .parent
            .expect("The root scope is never popped.");
        self.frames.truncate(self.current);
        self.current = parent;
    }

    /// Walks outward from the current frame to the first one owning `name`.
    fn resolve(&self, name: &str) -> Option<usize> {
        let mut frame = self.current;
        loop {
            if self.frames[frame].values.contains_key(name) {
                return Some(frame);
            }
            frame = self.frames[frame].parent?;
        }
    }

    /// Current scope only; shadowing an outer binding is fine, re-declaring
    /// in the same scope is not.
    pub fn has(&self, name: &str) -> bool {
        self.frames[self.current].values.contains_key(name)
    }

    /// Whole chain; used by assignment's existence pre-check.
    pub fn is_declared(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    pub fn declare(
        &mut self,
        name: &str,
        value: Value,
        constant: bool,
    ) -> Result<(), RuntimeErrorKind> {
        if self.has(name) {
            return Err(RuntimeErrorKind::Redeclaration(name.to_compact_string()));
        }
        let frame = &mut self.frames[self.current];
        frame.values.insert(name.to_compact_string(), value);
        if constant {
            frame.constants.insert(name.to_compact_string());
        }
        Ok(())
    }

    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), RuntimeErrorKind> {
        let Some(frame) = self.resolve(name) else {
            return Err(RuntimeErrorKind::AssignmentToUndeclared(
                name.to_compact_string(),
            ));
        };
        if self.frames[frame].constants.contains(name) {
            return Err(RuntimeErrorKind::ConstAssignment(name.to_compact_string()));
        }
        self.frames[frame]
            .values
            .insert(name.to_compact_string(), value);
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Result<Value, RuntimeErrorKind> {
        match self.resolve(name) {
            Some(frame) => Ok(self.frames[frame].values[name].clone()),
            None => Err(RuntimeErrorKind::UndefinedSymbol(name.to_compact_string())),
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shadowing_does_not_touch_the_outer_binding() {
        let mut env = Environment::new();
        env.declare("x", Value::Integer(1), false).unwrap();
        env.push_scope();
        env.declare("x", Value::Integer(2), false).unwrap();
        assert_eq!(env.lookup("x"), Ok(Value::Integer(2)));
        env.pop_scope();
        assert_eq!(env.lookup("x"), Ok(Value::Integer(1)));
    }

    #[test]
    fn redeclaration_in_the_same_scope_fails() {
        let mut env = Environment::new();
        env.declare("x", Value::Integer(1), false).unwrap();
        assert!(matches!(
            env.declare("x", Value::Integer(2), false),
            Err(RuntimeErrorKind::Redeclaration(_))
        ));
    }

    #[test]
    fn assignment_resolves_outward() {
        let mut env = Environment::new();
        env.declare("x", Value::Integer(1), false).unwrap();
        env.push_scope();
        env.assign("x", Value::Integer(5)).unwrap();
        env.pop_scope();
        assert_eq!(env.lookup("x"), Ok(Value::Integer(5)));
    }

    #[test]
    fn constants_are_protected() {
        let mut env = Environment::new();
        assert!(matches!(
            env.assign("pi", Value::Integer(3)),
            Err(RuntimeErrorKind::ConstAssignment(_))
        ));
    }

    #[test]
    fn bindings_die_with_their_scope() {
        let mut env = Environment::new();
        env.push_scope();
        env.declare("y", Value::Integer(1), false).unwrap();
        env.pop_scope();
        assert!(matches!(
            env.lookup("y"),
            Err(RuntimeErrorKind::UndefinedSymbol(_))
        ));
    }
}
