//! Grammar context passed by value through every parse routine.

use arrowhead_options::ParseOptions;

bitflags::bitflags! {
    /// The grammar mode in effect for one parse routine.
    ///
    /// A routine derives the context of a nested region with [`Context::with`]
    /// and [`Context::without`] and passes the new value down; the caller's
    /// copy is never changed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Context: u32 {
        const NONE                    = 0;
        const STRICT                  = 1 << 0;
        const MODULE                  = 1 << 1;
        /// A `/` at the next token starts a regular expression.
        const ALLOW_REGEXP            = 1 << 2;
        /// Inside a generator: `yield` is an operator.
        const YIELD                   = 1 << 3;
        /// Inside an async function or module: `await` is an operator.
        const AWAIT                   = 1 << 4;
        const RETURN                  = 1 << 5;
        /// Inside the true branch of `?:`, where `(a): b => c` needs a
        /// lookahead before its `:` is taken as a return type.
        const IN_CONDITIONAL          = 1 << 6;
        const ALLOW_CONDITIONAL_TYPES = 1 << 7;
        const JSX                     = 1 << 8;
        /// `in` is not a binary operator (for-statement initializers).
        const DISALLOW_IN             = 1 << 9;
        const DISABLE_WEB_COMPAT      = 1 << 10;
        const IN_CLASS                = 1 << 11;
        const DECORATOR               = 1 << 12;
    }
}

impl Context {
    /// The root context for a parse with the given options.
    pub fn from_options(options: &ParseOptions) -> Self {
        let mut ctx = Context::ALLOW_CONDITIONAL_TYPES;
        if options.is_module() {
            ctx |= Context::MODULE | Context::STRICT | Context::AWAIT;
        }
        if options.implied_strict {
            ctx |= Context::STRICT;
        }
        if !options.web_compat {
            ctx |= Context::DISABLE_WEB_COMPAT;
        }
        if options.jsx {
            ctx |= Context::JSX;
        }
        ctx
    }

    #[inline]
    #[must_use]
    pub fn with(self, flags: Context) -> Self {
        self | flags
    }

    #[inline]
    #[must_use]
    pub fn without(self, flags: Context) -> Self {
        self - flags
    }

    /// The context of a function body with the given async/generator shape.
    #[must_use]
    pub fn for_function_body(self, is_async: bool, is_generator: bool) -> Self {
        let mut ctx = self
            .without(
                Context::YIELD
                    | Context::AWAIT
                    | Context::IN_CONDITIONAL
                    | Context::DISALLOW_IN
                    | Context::DECORATOR,
            )
            .with(Context::RETURN | Context::ALLOW_CONDITIONAL_TYPES);
        if is_async {
            ctx |= Context::AWAIT;
        }
        if is_generator {
            ctx |= Context::YIELD;
        }
        ctx
    }

    #[inline]
    pub fn is_strict(self) -> bool {
        self.contains(Context::STRICT)
    }

    #[inline]
    pub fn is_module(self) -> bool {
        self.contains(Context::MODULE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_options_script_defaults() {
        let ctx = Context::from_options(&ParseOptions::script());
        assert!(!ctx.is_strict());
        assert!(!ctx.is_module());
        assert!(!ctx.contains(Context::DISABLE_WEB_COMPAT));
        assert!(ctx.contains(Context::ALLOW_CONDITIONAL_TYPES));
    }

    #[test]
    fn test_from_options_module_is_strict() {
        let ctx = Context::from_options(&ParseOptions::module());
        assert!(ctx.is_strict());
        assert!(ctx.is_module());
        assert!(ctx.contains(Context::AWAIT));
    }

    #[test]
    fn test_from_options_switches() {
        let options = ParseOptions::script()
            .with_implied_strict(true)
            .with_web_compat(false)
            .with_jsx(true);
        let ctx = Context::from_options(&options);
        assert!(ctx.is_strict());
        assert!(ctx.contains(Context::DISABLE_WEB_COMPAT));
        assert!(ctx.contains(Context::JSX));
    }

    #[test]
    fn test_derivation_does_not_mutate() {
        let outer = Context::STRICT;
        let inner = outer.with(Context::YIELD);
        assert_eq!(outer, Context::STRICT);
        assert!(inner.contains(Context::YIELD));
        assert_eq!(inner.without(Context::YIELD), outer);
    }

    #[test]
    fn test_function_body_context() {
        let outer = Context::STRICT | Context::YIELD | Context::DISALLOW_IN | Context::IN_CONDITIONAL;
        let body = outer.for_function_body(true, false);
        assert!(body.contains(Context::AWAIT | Context::RETURN | Context::STRICT));
        assert!(!body.contains(Context::YIELD));
        assert!(!body.contains(Context::DISALLOW_IN));
        assert!(!body.contains(Context::IN_CONDITIONAL));

        let generator = Context::NONE.for_function_body(false, true);
        assert!(generator.contains(Context::YIELD));
        assert!(!generator.contains(Context::AWAIT));
    }
}
