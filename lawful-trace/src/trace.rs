//! A writer monad that records what a computation did, step by step.
//!
//! `flat_map` only concatenates logs. Entries are written by the explicit
//! constructors ([`Traced::step`], [`Traced::note`], [`Traced::label`]), which is
//! what keeps `of` a left and right identity.

use std::fmt::Display;
use std::path::Path;

use lawful::{Monad, PartiallyApplied};
use serde::Serialize;
use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "typ", rename_all = "snake_case")]
pub enum TraceAction {
    // labelled value produced by some step
    Step { label: String, txt: String },
    // info text display!
    InfoCard {
        info_header: String,
        info_txt: String,
    },
}

/// A value together with the ordered actions recorded while producing it.
///
/// ```rust
/// use lawful::{Monad, PartiallyApplied};
/// use lawful_trace::{TraceAction, Traced};
///
/// type T = Traced<PartiallyApplied>;
///
/// let res = T::flat_map(Traced::step("parse", 20), |x| Traced::step("double", x * 2));
///
/// assert_eq!(*res.value(), 40);
/// assert_eq!(
///     res.actions(),
///     &[
///         TraceAction::Step { label: "parse".to_string(), txt: "20".to_string() },
///         TraceAction::Step { label: "double".to_string(), txt: "40".to_string() },
///     ]
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Traced<A> {
    value: A,
    actions: Vec<TraceAction>,
}

impl<A> Traced<A> {
    /// A value with an empty log
    pub fn new(value: A) -> Self {
        Self {
            value,
            actions: Vec::new(),
        }
    }

    /// A value with a single step recording its display form
    pub fn step(label: impl Into<String>, value: A) -> Self
    where
        A: Display,
    {
        let txt = format!("{}", value);
        Self {
            value,
            actions: vec![TraceAction::Step {
                label: label.into(),
                txt,
            }],
        }
    }

    /// Prepend an info card to the log
    pub fn label(mut self, info_header: impl Into<String>, info_txt: impl Into<String>) -> Self {
        let mut actions = vec![TraceAction::InfoCard {
            info_header: info_header.into(),
            info_txt: info_txt.into(),
        }];
        actions.extend(self.actions);
        self.actions = actions;

        self
    }

    /// Keep `next`'s value, recording this log followed by `next`'s
    pub fn fuse<B>(self, next: Traced<B>) -> Traced<B> {
        let mut actions = self.actions;
        actions.extend(next.actions);

        Traced {
            value: next.value,
            actions,
        }
    }

    pub fn value(&self) -> &A {
        &self.value
    }

    pub fn actions(&self) -> &[TraceAction] {
        &self.actions
    }

    pub fn into_parts(self) -> (A, Vec<TraceAction>) {
        (self.value, self.actions)
    }

    /// `{"result": <value>, "actions": [...]}`, each action tagged with its `typ`
    pub fn serialize_json(&self) -> serde_json::Result<String>
    where
        A: Serialize,
    {
        let mut h = serde_json::Map::new();
        h.insert("result".to_string(), serde_json::to_value(&self.value)?);
        h.insert("actions".to_string(), serde_json::to_value(&self.actions)?);

        serde_json::to_string(&Value::Object(h))
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> std::io::Result<()>
    where
        A: Serialize,
    {
        let to_write = self.serialize_json()?;
        std::fs::write(path, to_write)
    }
}

impl Traced<()> {
    /// A log entry with no value attached
    pub fn note(info_header: impl Into<String>, info_txt: impl Into<String>) -> Self {
        Traced::new(()).label(info_header, info_txt)
    }
}

impl Monad for Traced<PartiallyApplied> {
    type Layer<X> = Traced<X>;

    fn of<A>(a: A) -> Self::Layer<A> {
        Traced::new(a)
    }

    fn flat_map<A, B>(
        input: Self::Layer<A>,
        mut f: impl FnMut(A) -> Self::Layer<B>,
    ) -> Self::Layer<B> {
        let Traced { value, mut actions } = input;
        let next = f(value);
        actions.extend(next.actions);

        Traced {
            value: next.value,
            actions,
        }
    }
}
