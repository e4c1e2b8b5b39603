use std::{fs, path::Path};

use anyhow::{Context, Result, anyhow};
use bon::Builder;
use derive_more::Display;
use log::info;
use serde::{Deserialize, Serialize};

use crate::tui::{Choice, MultiSelect, Palette, SingleSelect, Theme};

/// Which prompt a file describes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum PromptKind {
    #[default]
    #[display("single")]
    Single,
    #[display("multi")]
    Multi,
}

/// One entry of a prompt file's choice list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct ChoiceSpec {
    /// Printed when the choice is confirmed
    #[builder(into)]
    pub value: String,
    /// Shown in the list instead of the value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub label: Option<String>,
    #[serde(default)]
    #[builder(default)]
    pub disabled: bool,
}

impl ChoiceSpec {
    #[must_use]
    pub fn to_choice(&self) -> Choice<String> {
        Choice {
            value: self.value.clone(),
            label: self.label.clone().unwrap_or_else(|| self.value.clone()),
            disabled: self.disabled,
        }
    }
}

/// A selection prompt described in TOML or JSON.
///
/// ```toml
/// kind = "multi"
/// label = "Toppings"
/// max = 2
/// defaults = [0]
///
/// [[choices]]
/// value = "cheese"
///
/// [[choices]]
/// value = "olives"
/// disabled = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(default)]
pub struct PromptFile {
    #[builder(default)]
    pub kind: PromptKind,
    #[builder(into)]
    pub label: Option<String>,
    #[builder(into)]
    pub prefix: Option<String>,
    #[builder(into)]
    pub description: Option<String>,
    pub page_size: Option<usize>,
    /// Allows confirming with nothing selected
    #[builder(default)]
    pub optional: bool,
    pub min: Option<usize>,
    /// Zero or unset means every choice may be selected
    pub max: Option<usize>,
    /// Indices of preselected choices
    #[builder(default)]
    pub defaults: Vec<usize>,
    /// Palette name, see `termprompt themes`
    #[builder(into)]
    pub theme: Option<String>,
    #[builder(default)]
    pub choices: Vec<ChoiceSpec>,
}

impl PromptFile {
    /// Reads a prompt file. Files ending in `.json` are parsed as JSON,
    /// everything else as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Unable to read {}", path.display()))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let file = if is_json {
            Self::from_json(&contents)
        } else {
            Self::from_toml(&contents)
        }
        .with_context(|| format!("Unable to parse {}", path.display()))?;

        info!(
            "Loaded {} prompt with {} choices from {}",
            file.kind,
            file.choices.len(),
            path.display()
        );
        Ok(file)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    #[must_use]
    pub fn choices(&self) -> Vec<Choice<String>> {
        self.choices.iter().map(ChoiceSpec::to_choice).collect()
    }

    /// The theme named in the file, if any.
    pub fn theme(&self) -> Result<Option<Theme>> {
        let Some(name) = self.theme.as_deref() else {
            return Ok(None);
        };
        let palette = Palette::by_name(name).ok_or_else(|| {
            let known: Vec<&str> = Palette::PRESETS.iter().map(|(name, _)| *name).collect();
            anyhow!("Unknown theme '{name}' (expected one of: {})", known.join(", "))
        })?;
        Ok(Some(Theme::resolve(&palette)))
    }

    /// Builds a single selection prompt from the file.
    pub fn single_select(&self) -> Result<SingleSelect<String>> {
        let mut prompt = SingleSelect::new(self.choices());
        if let Some(label) = &self.label {
            prompt = prompt.with_label(label);
        }
        if let Some(prefix) = &self.prefix {
            prompt = prompt.with_prefix(prefix);
        }
        if let Some(description) = &self.description {
            prompt = prompt.with_description(description);
        }
        if let Some(page_size) = self.page_size {
            prompt = prompt.with_page_size(page_size);
        }
        if let Some(&index) = self.defaults.first() {
            prompt = prompt.with_default_choice(index);
        }
        if self.optional {
            prompt = prompt.optional();
        }
        if let Some(theme) = self.theme()? {
            prompt = prompt.with_theme(theme);
        }
        Ok(prompt)
    }

    /// Builds a multiple selection prompt from the file.
    pub fn multi_select(&self) -> Result<MultiSelect<String>> {
        let mut prompt =
            MultiSelect::new(self.choices()).with_default_choices(self.defaults.iter().copied());
        if let Some(label) = &self.label {
            prompt = prompt.with_label(label);
        }
        if let Some(prefix) = &self.prefix {
            prompt = prompt.with_prefix(prefix);
        }
        if let Some(description) = &self.description {
            prompt = prompt.with_description(description);
        }
        if let Some(page_size) = self.page_size {
            prompt = prompt.with_page_size(page_size);
        }
        if self.optional {
            prompt = prompt.optional();
        }
        if let Some(min) = self.min {
            prompt = prompt.with_min_selected_count(min);
        }
        if let Some(max) = self.max {
            prompt = prompt.with_max_selected_count(max);
        }
        if let Some(theme) = self.theme()? {
            prompt = prompt.with_theme(theme);
        }
        Ok(prompt)
    }
}
