//! Call logging.
//!
//! A [`CallLogger`] wraps functions so that every call first emits one record
//! of the form
//!
//! ```text
//! Calling: add with arguments:  1, 2 and no keywords
//! ```
//!
//! and then runs the function with its arguments untouched. Arguments are
//! passed as a tuple; any `Fn` of up to eight parameters can be wrapped.
//!
//! ```rust,ignore
//! let traced = CallLogger::new(logger).with_level(Level::Info);
//! let add = traced.wrap_named("add", |a: i32, b: i32| a + b);
//! assert_eq!(add.call((1, 2)), 3);
//! ```

use crate::error::Result;
use crate::level::Level;
use crate::logger::Logger;
use crate::utils::summary::{describe, describe_keyword};
use std::fmt::Debug;
use std::sync::Arc;

/// Logs calls to the functions it wraps on a target logger.
#[derive(Debug, Clone)]
pub struct CallLogger {
    logger: Arc<Logger>,
    silent: bool,
    level: Level,
}

impl CallLogger {
    /// Not silent, DEBUG.
    pub fn new(logger: Arc<Logger>) -> Self {
        Self {
            logger,
            silent: false,
            level: Level::Debug,
        }
    }

    /// Builds a call logger from a level name, rejecting unknown names here
    /// rather than on the first call.
    pub fn from_level_name(logger: Arc<Logger>, silent: bool, level: &str) -> Result<Self> {
        Ok(Self::new(logger).silent(silent).with_level(level.parse()?))
    }

    pub fn silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn logger(&self) -> &Arc<Logger> {
        &self.logger
    }

    pub fn is_silent(&self) -> bool {
        self.silent
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Wraps a function item, naming it after the last segment of its path.
    /// Closures have no useful path; prefer [`wrap_named`](Self::wrap_named).
    pub fn wrap<F>(&self, function: F) -> Logged<F> {
        self.wrap_named(function_name::<F>(), function)
    }

    pub fn wrap_named<F>(&self, name: impl Into<String>, function: F) -> Logged<F> {
        Logged {
            name: name.into(),
            call_logger: self.clone(),
            inner: function,
        }
    }

    /// Emits the call record for `function` unless silenced.
    pub fn write_log(&self, function: &str, summary: &CallSummary) {
        if self.silent {
            return;
        }
        self.logger.log(self.level, summary.message(function));
    }

    /// Logs a hand-built summary, then runs `body`. Used for calls whose
    /// named options should appear as keywords.
    pub fn invoke<R>(&self, function: &str, summary: &CallSummary, body: impl FnOnce() -> R) -> R {
        self.write_log(function, summary);
        body()
    }

    fn should_log(&self) -> bool {
        !self.silent && self.logger.is_enabled(self.level)
    }
}

/// A function wrapped by a [`CallLogger`].
#[derive(Debug, Clone)]
pub struct Logged<F> {
    name: String,
    call_logger: CallLogger,
    inner: F,
}

impl<F> Logged<F> {
    /// Name of the wrapped function.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inner(&self) -> &F {
        &self.inner
    }

    pub fn into_inner(self) -> F {
        self.inner
    }

    pub fn call_logger(&self) -> &CallLogger {
        &self.call_logger
    }

    /// Logs the call, then forwards `args` to the wrapped function and returns
    /// its result as is.
    pub fn call<A, Out>(&self, args: A) -> Out
    where
        A: Arguments,
        F: Invoke<A, Out>,
    {
        if self.call_logger.should_log() {
            let mut summary = CallSummary::new();
            args.summarize(&mut summary);
            self.call_logger.write_log(&self.name, &summary);
        }
        self.inner.invoke(args)
    }
}

/// Truncated descriptions of a call's positional and keyword arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallSummary {
    arguments: Vec<String>,
    keywords: Vec<String>,
}

impl CallSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arg<T: Debug + ?Sized>(mut self, value: &T) -> Self {
        self.push_arg(value);
        self
    }

    pub fn keyword<T: Debug + ?Sized>(mut self, key: &str, value: &T) -> Self {
        self.push_keyword(key, value);
        self
    }

    pub fn push_arg<T: Debug + ?Sized>(&mut self, value: &T) {
        self.arguments.push(describe(value));
    }

    pub fn push_keyword<T: Debug + ?Sized>(&mut self, key: &str, value: &T) {
        self.keywords.push(describe_keyword(key, value));
    }

    pub fn arguments_text(&self) -> String {
        if self.arguments.is_empty() {
            "no arguments".to_string()
        } else {
            format!("arguments:  {}", self.arguments.join(", "))
        }
    }

    pub fn keywords_text(&self) -> String {
        if self.keywords.is_empty() {
            "no keywords".to_string()
        } else {
            format!("kwds:  {}", self.keywords.join(", "))
        }
    }

    pub fn message(&self, function: &str) -> String {
        format!(
            "Calling: {} with {} and {}",
            function,
            self.arguments_text(),
            self.keywords_text()
        )
    }
}

/// Argument tuples that can describe themselves.
pub trait Arguments {
    fn summarize(&self, summary: &mut CallSummary);
}

/// Functions callable with an argument tuple.
pub trait Invoke<Args, Out> {
    fn invoke(&self, args: Args) -> Out;
}

macro_rules! impl_call_tuple {
    ($($T:ident $v:ident),*) => {
        impl<$($T: Debug),*> Arguments for ($($T,)*) {
            #[allow(unused_variables)]
            fn summarize(&self, summary: &mut CallSummary) {
                let ($($v,)*) = self;
                $(summary.push_arg($v);)*
            }
        }

        impl<Func, Out, $($T),*> Invoke<($($T,)*), Out> for Func
        where
            Func: Fn($($T),*) -> Out,
        {
            fn invoke(&self, args: ($($T,)*)) -> Out {
                let ($($v,)*) = args;
                self($($v),*)
            }
        }
    };
}

impl_call_tuple!();
impl_call_tuple!(A a);
impl_call_tuple!(A a, B b);
impl_call_tuple!(A a, B b, C c);
impl_call_tuple!(A a, B b, C c, D d);
impl_call_tuple!(A a, B b, C c, D d, E e);
impl_call_tuple!(A a, B b, C c, D d, E e, G g);
impl_call_tuple!(A a, B b, C c, D d, E e, G g, H h);
impl_call_tuple!(A a, B b, C c, D d, E e, G g, H h, I i);

/// Last path segment of `F`'s type name, generics stripped.
fn function_name<F>() -> String {
    let full = std::any::type_name::<F>();
    let path = full.split('<').next().unwrap_or(full);
    path.rsplit("::").next().unwrap_or(path).to_string()
}

/// Wraps `func` with a call logger and calls it in one go.
///
/// ```rust,ignore
/// let sum = log_call!(traced, add(1, 2));
/// ```
#[macro_export]
macro_rules! log_call {
    ($call_logger:expr, $func:ident ( $($arg:expr),* $(,)? )) => {
        $call_logger
            .wrap_named(stringify!($func), $func)
            .call(($($arg,)*))
    };
}
