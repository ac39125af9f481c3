//! Built-in Markdown report template.
//!
//! Every `{{PLACEHOLDER}}` understood by [`super::resolve`] appears once.

const DEFAULT_TEMPLATE: &str = "\
# Wheel analysis

Seed draw: {{SEED_WHEEL}} on {{DRAW_DATE}} (statistics as of {{AS_OF_DATE}})

## Numbers analysed

{{NUMBER_GROUP}}

**Analysis set:** {{ANALYSIS_SET}}

## Most promising wheels

{{WHEEL_RANKING}}

## Suggested numbers for {{BEST_WHEEL}}

{{SUGGESTIONS}}
";

pub fn template() -> &'static str {
    DEFAULT_TEMPLATE
}
