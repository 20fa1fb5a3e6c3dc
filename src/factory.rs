//! Custom function factories.
//!
//! Build a handle for any Typst function the library does not wrap, such as
//! a package function or a user `#let`, with a fixed call shape.
//!
//! ```
//! use typst_builder::factory;
//! use typst_builder::{Length, Ratio, Value};
//!
//! let pad = factory::normal("pad");
//! let code = pad
//!     .call()
//!     .body(Value::content("Hello, world!"))
//!     .param("left", Ratio::new(4.0) + Length::pt(0.0))
//!     .render()
//!     .unwrap();
//! assert_eq!(code, "#pad(left: 4%+0pt)[Hello, world!]");
//!
//! let grid = factory::pre_series("subpar.grid");
//! let code = grid
//!     .call()
//!     .args([Value::content(""), Value::content("")])
//!     .param("columns", vec![Value::raw("1fr"), Value::raw("1fr")])
//!     .render()
//!     .unwrap();
//! assert_eq!(code, "#subpar.grid([], [], columns: (1fr, 1fr))");
//! ```

use crate::call::{Call, Shape};
use crate::error::Result;
use crate::func::{Func, Implement};
use crate::value::Value;

/// A user-level function with a fixed call shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Custom {
    func: Func,
    shape: Shape,
}

impl Custom {
    /// Create a custom function rendered as `name`.
    pub fn new(name: impl Into<String>, shape: Shape) -> Self {
        Self {
            func: Func::new(Implement::named(name)),
            shape,
        }
    }

    /// Start a call.
    pub fn call(&self) -> Call {
        Call::owned(self.func.clone(), self.shape)
    }

    /// Start a method call on `receiver`.
    pub fn call_on(&self, receiver: impl Into<Value>) -> Call {
        self.call().receiver(receiver)
    }

    /// Attach a sub-function. See [`Func::attach`].
    pub fn attach(mut self, func: &'static Func, name: Option<&str>) -> Result<Self> {
        self.func = self.func.attach(func, name)?;
        Ok(self)
    }

    /// The underlying function.
    pub fn func(&self) -> &Func {
        &self.func
    }

    /// The call shape.
    pub fn shape(&self) -> Shape {
        self.shape
    }
}

/// A function with an optional body and keyword params.
pub fn normal(name: impl Into<String>) -> Custom {
    Custom::new(name, Shape::Normal)
}

/// A function taking positional arguments only.
pub fn positional(name: impl Into<String>) -> Custom {
    Custom::new(name, Shape::Positional)
}

/// A method called on a receiver.
pub fn instance(name: impl Into<String>) -> Custom {
    Custom::new(name, Shape::Instance)
}

/// A container whose params precede its children.
pub fn post_series(name: impl Into<String>) -> Custom {
    Custom::new(name, Shape::PostSeries)
}

/// A container whose children precede its params.
pub fn pre_series(name: impl Into<String>) -> Custom {
    Custom::new(name, Shape::PreSeries)
}
