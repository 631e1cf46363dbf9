// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::collections::HashMap;

use log::trace;
use thiserror::Error;

use crate::{TypeSpecifier, ValueType};

/// The variable store and the type store of one interpreter instance.
///
/// Names only enter through [`Store::declare`] and are never removed. Every
/// mutation checks the new text against the variable's type before it is
/// committed, so a failed write leaves the previous value in place.
#[derive(Debug, Default, Clone)]
pub struct Store {
    values: HashMap<String, String>,
    types: HashMap<String, ValueType>,
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn value_type(&self, name: &str) -> Option<ValueType> {
        self.types.get(name).copied()
    }

    #[must_use]
    pub fn is_declared(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Declares (or re-declares) `name`. Without an initializer the type's
    /// default value is stored; `auto` requires one and takes its type from it.
    pub fn declare(&mut self, name: &str, type_specifier: TypeSpecifier, initializer: Option<String>) -> Result<ValueType, ExecutionError> {
        let (ty, value) = match (type_specifier.value_type(), initializer) {
            (Some(ty), Some(value)) => {
                Self::check(name, ty, &value)?;
                (ty, value)
            }

            (Some(ty), None) => (ty, ty.default_value().to_string()),

            (None, Some(value)) => (ValueType::infer(&value), value),

            (None, None) => {
                return Err(ExecutionError::MissingInitializer { name: name.to_string() });
            }
        };

        trace!("declare {name}: {ty} = {value:?}");
        self.types.insert(name.to_string(), ty);
        self.values.insert(name.to_string(), value);
        Ok(ty)
    }

    /// Overwrites the value of an already declared variable.
    pub fn assign(&mut self, name: &str, value: String) -> Result<(), ExecutionError> {
        let Some(ty) = self.value_type(name) else {
            return Err(ExecutionError::UndeclaredVariable { name: name.to_string() });
        };

        Self::check(name, ty, &value)?;

        trace!("assign {name} = {value:?}");
        self.values.insert(name.to_string(), value);
        Ok(())
    }

    fn check(name: &str, expected: ValueType, value: &str) -> Result<(), ExecutionError> {
        if expected.accepts(value) {
            return Ok(());
        }

        Err(ExecutionError::TypeMismatch {
            name: name.to_string(),
            expected,
            value: value.to_string(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ExecutionError {
    #[error("undeclared variable: {name}")]
    UndeclaredVariable { name: String },

    #[error("type mismatch: cannot assign \"{value}\" to {expected} variable `{name}`")]
    TypeMismatch { name: String, expected: ValueType, value: String },

    #[error("auto requires an initializer for `{name}`")]
    MissingInitializer { name: String },
}
