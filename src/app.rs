use dioxus::prelude::*;
use ecommerce_input_ui::{provide_translator, theme::stylesheet};

use crate::context::demo_config;
use crate::pages::DemoPage;

/// Page-level layout around the demo fields
const DEMO_STYLES: &str = r#"
body {
  margin: 0;
  background: #2b2b2b;
  font-family: Arial, Helvetica, sans-serif;
}

.demo-page {
  display: flex;
  justify-content: center;
  min-height: 100vh;
  padding: 48px 16px;
  box-sizing: border-box;
}

.demo-page--rounded {
  background: #ffffff;
}

.demo-fields {
  width: 100%;
  max-width: 360px;
  display: flex;
  flex-direction: column;
  gap: 24px;
}
"#;

/// Root application component.
///
/// Provides the stylesheet, the translator context and the page title.
#[component]
pub fn App() -> Element {
    let config = use_hook(demo_config);
    provide_translator(config.translator.clone());

    rsx! {
        document::Title { "{config.title}" }
        style { {stylesheet()} }
        style { {DEMO_STYLES} }
        DemoPage { variant: config.variant }
    }
}
