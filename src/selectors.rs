//! Locators for the FIPE consultation page.
//!
//! The portal has no API contract; these XPaths mirror the live DOM of
//! `https://veiculos.fipe.org.br/` and are the single point to fix when the
//! site changes.

/// Locators for one "chosen"-style dropdown widget.
#[derive(Debug, Clone, Copy)]
pub struct DropdownSelectors {
    /// The closed widget box that opens the option list when clicked.
    pub trigger: &'static str,
    /// The `<ul>` holding the currently visible `<li>` options.
    pub list: &'static str,
    /// The text input that filters the option list.
    pub search: &'static str,
}

/// Tab for "Consulta de carros e utilitários pequenos".
pub const CARS_TAB: &str = r#"//*[@id="front"]/div[1]/div[2]/ul/li[1]/a"#;

pub const REFERENCE_MONTH: DropdownSelectors = DropdownSelectors {
    trigger: r#"//*[@id="selectTabelaReferenciacarro_chosen"]"#,
    list: r#"//*[@id="selectTabelaReferenciacarro_chosen"]/div/ul"#,
    search: r#"//*[@id="selectTabelaReferenciacarro_chosen"]/div/div/input"#,
};

pub const BRAND: DropdownSelectors = DropdownSelectors {
    trigger: r#"//*[@id="selectMarcacarro_chosen"]"#,
    list: r#"//*[@id="selectMarcacarro_chosen"]/div/ul"#,
    search: r#"//*[@id="selectMarcacarro_chosen"]/div/div/input"#,
};

pub const MODEL: DropdownSelectors = DropdownSelectors {
    trigger: r#"//*[@id="selectAnoModelocarro_chosen"]"#,
    list: r#"//*[@id="selectAnoModelocarro_chosen"]/div/ul"#,
    search: r#"//*[@id="selectAnoModelocarro_chosen"]/div/div/input"#,
};

pub const MODEL_YEAR: DropdownSelectors = DropdownSelectors {
    trigger: r#"//*[@id="selectAnocarro_chosen"]"#,
    list: r#"//*[@id="selectAnocarro_chosen"]/div/ul"#,
    search: r#"//*[@id="selectAnocarro_chosen"]/div/div/input"#,
};

/// The purple "Pesquisar" button below the dropdowns.
pub const SEARCH_BUTTON: &str = r#"//*[@id="buttonPesquisarcarro"]"#;

/// Substring whose appearance in the page body confirms the results table
/// has rendered.
pub const RESULT_MARKER: &str = "Preço Médio";
