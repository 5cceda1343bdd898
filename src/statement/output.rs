//! Values produced by compiling statements.
//!
//! Compilation never mutates shared state: each call returns a [`Compiled`]
//! value and callers merge them in statement order.

use std::collections::BTreeSet;

use bitflags::bitflags;
use serde::Serialize;

bitflags! {
    /// Behaviors a generated test verifies, used to name the test case.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TestedBits: u8 {
        /// Renders a view.
        const VIEW = 1 << 0;
        /// Redirects.
        const REDIRECT = 1 << 1;
        /// Persists an entity.
        const SAVE = 1 << 2;
        /// Deletes an entity.
        const DELETE = 1 << 3;
        /// Returns a response body or status.
        const RESPONDS = 1 << 4;
    }
}

impl Serialize for TestedBits {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter_names().map(|(name, _)| name.to_lowercase()))
    }
}

impl TestedBits {
    /// Describes the tested behaviors as a phrase, in a fixed order:
    /// `displays view`, `redirects`, `saves`, `deletes`, `responds with`.
    #[must_use]
    pub fn describe(self) -> Option<String> {
        let mut verbs = Vec::new();
        for (flag, verb) in [
            (Self::VIEW, "displays view"),
            (Self::REDIRECT, "redirects"),
            (Self::SAVE, "saves"),
            (Self::DELETE, "deletes"),
            (Self::RESPONDS, "responds with"),
        ] {
            if self.contains(flag) {
                verbs.push(verb);
            }
        }
        let last = verbs.pop()?;
        if verbs.is_empty() {
            Some(last.to_string())
        } else {
            Some(format!("{} and {last}", verbs.join(", ")))
        }
    }
}

/// A sorted, duplicate-free set of class imports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ImportSet(BTreeSet<String>);

impl ImportSet {
    /// An empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one fully-qualified class name.
    pub fn insert(&mut self, class: impl Into<String>) {
        self.0.insert(class.into());
    }

    /// Merges another set into this one.
    pub fn merge(&mut self, other: &Self) {
        self.0.extend(other.0.iter().cloned());
    }

    /// Returns `true` if the class is present.
    #[must_use]
    pub fn contains(&self, class: &str) -> bool {
        self.0.contains(class)
    }

    /// Returns `true` if no imports were collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Imports in case-sensitive lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Renders `use X;` lines in order.
    #[must_use]
    pub fn to_use_statements(&self) -> String {
        self.iter().map(|class| format!("use {class};")).collect::<Vec<_>>().join("\n")
    }
}

impl<S: Into<String>> FromIterator<S> for ImportSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Side-channel data for the test artifact of one statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TestEffects {
    /// Imports the test class needs.
    pub imports: ImportSet,
    /// Traits the test class uses.
    pub traits: ImportSet,
    /// Arrange lines run before the request.
    pub setup: Vec<String>,
    /// Fake activation lines (`Mail::fake();`).
    pub fakes: Vec<String>,
    /// Assertions run after the request; entries may span several lines.
    pub assertions: Vec<String>,
    /// Request payload entries: `'title' => $title`.
    pub request_data: Vec<String>,
    /// Form request class whose use should be asserted.
    pub form_request: Option<String>,
    /// Behaviors verified.
    pub tested: TestedBits,
}

impl TestEffects {
    /// Appends another statement's effects, keeping line order.
    pub fn merge(&mut self, other: &Self) {
        self.imports.merge(&other.imports);
        self.traits.merge(&other.traits);
        for line in &other.setup {
            if !self.setup.contains(line) {
                self.setup.push(line.clone());
            }
        }
        for line in &other.fakes {
            if !self.fakes.contains(line) {
                self.fakes.push(line.clone());
            }
        }
        self.assertions.extend(other.assertions.iter().cloned());
        self.request_data.extend(other.request_data.iter().cloned());
        if other.form_request.is_some() {
            self.form_request.clone_from(&other.form_request);
        }
        self.tested |= other.tested;
    }
}

/// Result of compiling one statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Compiled {
    /// Controller lines, relative indentation only.
    pub code: Vec<String>,
    /// Imports the controller needs for `code`.
    pub imports: ImportSet,
    /// Return type the statement imposes on the method.
    pub return_type: Option<String>,
    /// Fully-qualified form request class when the statement validates input.
    pub validates_with: Option<String>,
    /// Test-artifact metadata.
    pub test: TestEffects,
}

impl Compiled {
    /// A result carrying only controller code.
    #[must_use]
    pub fn line(code: impl Into<String>) -> Self {
        Self { code: vec![code.into()], ..Self::default() }
    }
}

/// Result of compiling every statement of one method in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompiledMethod {
    /// Method name.
    pub name: String,
    /// Controller body lines.
    pub code: Vec<String>,
    /// Controller imports.
    pub imports: ImportSet,
    /// Return type of the method, from the last statement that set one.
    pub return_type: Option<String>,
    /// Form request class, when the method validates.
    pub request: Option<String>,
    /// Merged test metadata.
    pub test: TestEffects,
}

impl CompiledMethod {
    /// Appends one compiled statement.
    pub fn push(&mut self, compiled: Compiled) {
        self.code.extend(compiled.code);
        self.imports.merge(&compiled.imports);
        if compiled.return_type.is_some() {
            self.return_type = compiled.return_type;
        }
        if compiled.validates_with.is_some() {
            self.request = compiled.validates_with;
        }
        self.test.merge(&compiled.test);
    }
}
