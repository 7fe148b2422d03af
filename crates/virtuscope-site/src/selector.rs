//! The header's language dropdown.

use virtuscope_i18n::{LanguageContext, LanguageStore};
use virtuscope_lang::LanguageCode;

/// One row of the dropdown.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LanguageOption {
    pub code: LanguageCode,
    pub flag: &'static str,
    pub name: &'static str,
    pub selected: bool,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LanguageSelector {
    open: bool,
}

impl LanguageSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Catalog key of the toggle button's accessible label.
    pub const fn aria_label_key() -> &'static str {
        "language.select"
    }

    /// Flag shown on the closed toggle button.
    pub fn current_flag<S: LanguageStore>(ctx: &LanguageContext<S>) -> &'static str {
        ctx.active_language().flag()
    }

    pub fn options<S: LanguageStore>(&self, ctx: &LanguageContext<S>) -> Vec<LanguageOption> {
        let active = ctx.active_language();
        LanguageCode::all()
            .map(|code| LanguageOption {
                code,
                flag: code.flag(),
                name: code.native_name(),
                selected: code == active,
            })
            .collect()
    }

    /// Switches the active language and closes the dropdown.
    pub fn select<S: LanguageStore>(&mut self, ctx: &mut LanguageContext<S>, code: LanguageCode) {
        ctx.set_active_language(code);
        self.close();
    }
}
