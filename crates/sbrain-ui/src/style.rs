//! Class Name Utilities
//!
//! Conditional class composition plus the light/dark variant tokens used by
//! the primitive controls. Dark variants rely on the `dark` class that
//! [`crate::theme`] toggles on the document root.

/// Join class fragments into one class string.
///
/// Empty fragments are skipped and a token that already appeared is not
/// repeated, so callers can pass conditional pieces freely.
pub fn cn<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut tokens: Vec<&str> = Vec::new();
    for token in parts.into_iter().flat_map(str::split_whitespace) {
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens.join(" ")
}

/// `class` when `cond` holds, otherwise the empty fragment
pub fn when(cond: bool, class: &str) -> &str {
    if cond { class } else { "" }
}

pub const LABEL: &str = "text-xs font-medium text-gray-500 dark:text-gray-400 ml-1";
pub const ERROR_TEXT: &str = "text-red-600 dark:text-red-400 text-sm";
pub const FIELD_ERROR_TEXT: &str = "text-red-600 dark:text-red-400 text-xs ml-1";
pub const MUTED_TEXT: &str = "text-gray-500 dark:text-gray-400";
pub const HEADING: &str = "text-xl font-semibold text-gray-800 dark:text-gray-100";
pub const PANEL: &str = "bg-white dark:bg-[#1a1a1a] rounded-xl shadow-2xl border border-gray-200 dark:border-gray-800";

/// Button look
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Full-width dark button used for form submission
    #[default]
    Primary,
    /// Rounded neutral button
    Secondary,
    /// Destructive action
    Danger,
}

impl ButtonVariant {
    pub fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "w-full h-10 text-sm text-white bg-background-dark dark:bg-background dark:text-text-dark-900 rounded-sm",
            ButtonVariant::Secondary => "bg-black text-white dark:text-black dark:bg-white hover:bg-gray-800 rounded-lg px-5 py-2.5 text-center",
            ButtonVariant::Danger => "text-white bg-red-500 hover:bg-red-600 rounded-lg px-5 py-2.5 text-center",
        }
    }
}

/// Text input look
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputVariant {
    /// Underlined field on the auth form
    #[default]
    Login,
    /// Filled field on content forms
    Content,
}

impl InputVariant {
    pub fn classes(self) -> &'static str {
        match self {
            InputVariant::Login => "w-full px-4 py-2 text-sm text-black dark:text-white border-b border-black/15 dark:border-white/15 focus:outline-none focus:border-b-border-input-focus dark:focus:border-b-border-input-focus-dark transition-border duration-400",
            InputVariant::Content => "w-full px-4 py-2 text-sm text-text-300 bg-gray-50 dark:bg-[#262626] border-b border-black/15 dark:border-white/15 focus:outline-none focus:border-b-border-input-focus dark:focus:border-b-border-input-focus-dark transition-border duration-400",
        }
    }
}

/// Select look
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectVariant {
    #[default]
    Default,
    Content,
}

impl SelectVariant {
    pub fn classes(self) -> &'static str {
        match self {
            SelectVariant::Default => "bg-white dark:bg-[#262626] text-gray-900 dark:text-gray-100 border border-gray-200 dark:border-gray-700 focus:border-blue-500 dark:focus:border-blue-500",
            SelectVariant::Content => "bg-gray-50 dark:bg-[#262626] text-gray-900 dark:text-gray-100 border border-gray-200 dark:border-gray-700 focus:border-blue-500 dark:focus:border-blue-500",
        }
    }
}

/// Spinner size
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpinnerSize {
    #[default]
    Sm,
    Md,
    Lg,
}

impl SpinnerSize {
    pub fn classes(self) -> &'static str {
        match self {
            SpinnerSize::Sm => "w-4 h-4 border-2",
            SpinnerSize::Md => "w-6 h-6 border-2",
            SpinnerSize::Lg => "w-8 h-8 border-3",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cn_skips_empty_and_duplicates() {
        let class = cn(["px-4 py-2", "", "  ", "py-2 rounded"]);
        assert_eq!(class, "px-4 py-2 rounded");
    }

    #[test]
    fn test_cn_with_conditional_fragment() {
        assert_eq!(cn(["btn", when(true, "active")]), "btn active");
        assert_eq!(cn(["btn", when(false, "active")]), "btn");
    }

    #[test]
    fn test_variants_carry_dark_tokens() {
        assert!(InputVariant::Content.classes().contains("dark:bg-[#262626]"));
        assert!(SelectVariant::Default.classes().contains("dark:"));
        assert!(ButtonVariant::Secondary.classes().contains("dark:bg-white"));
        assert_eq!(SpinnerSize::default(), SpinnerSize::Sm);
    }
}
