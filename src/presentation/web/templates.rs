//! Page Templates
//!
//! Handlebars templates compiled into the binary. Every page wraps itself in
//! the `layout` partial.

use axum::response::Html;
use handlebars::{Handlebars, TemplateError};
use serde::Serialize;

use crate::shared::error::AppError;

const LAYOUT: &str = include_str!("../../../templates/layout.hbs");

const PAGES: &[(&str, &str)] = &[
    ("index", include_str!("../../../templates/index.hbs")),
    ("login", include_str!("../../../templates/login.hbs")),
    ("jobs/list", include_str!("../../../templates/jobs/list.hbs")),
    ("jobs/detail", include_str!("../../../templates/jobs/detail.hbs")),
];

/// Registry of the HTML pages
pub struct Pages {
    hb: Handlebars<'static>,
}

impl Pages {
    pub fn new() -> Result<Self, TemplateError> {
        let mut hb = Handlebars::new();
        hb.register_partial("layout", LAYOUT)?;
        for (name, source) in PAGES {
            hb.register_template_string(name, *source)?;
        }

        Ok(Self { hb })
    }

    /// Render a registered page
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<Html<String>, AppError> {
        self.hb.render(name, data).map(Html).map_err(|e| {
            AppError::Internal(format!("Rendering page '{}' failed: {}", name, e))
        })
    }
}
