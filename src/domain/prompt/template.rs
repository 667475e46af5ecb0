//! Embedded instruction templates rendered with minijinja.

use minijinja::{Environment, UndefinedBehavior, Value};

use crate::domain::AppError;

pub const TAILOR_SYSTEM: &str = "tailor_system.j2";
pub const TAILOR_INSTRUCTIONS: &str = "tailor_instructions.j2";
pub const MESSAGE_SYSTEM: &str = "message_system.j2";
pub const MESSAGE_INSTRUCTIONS: &str = "message_instructions.j2";

static TEMPLATES: [(&str, &str); 4] = [
    (TAILOR_SYSTEM, include_str!("assets/tailor_system.j2")),
    (TAILOR_INSTRUCTIONS, include_str!("assets/tailor_instructions.j2")),
    (MESSAGE_SYSTEM, include_str!("assets/message_system.j2")),
    (MESSAGE_INSTRUCTIONS, include_str!("assets/message_instructions.j2")),
];

/// Render one of the embedded templates.
///
/// Only instruction text goes through the template engine; user content
/// (LaTeX source, job descriptions) is appended verbatim by the caller so that
/// `{{`/`{%` sequences inside it are never interpreted.
pub fn render(name: &str, context: Value) -> Result<String, AppError> {
    let env = environment()?;
    let template = env.get_template(name).map_err(|err| AppError::PromptAssembly {
        template: name.to_string(),
        reason: err.to_string(),
    })?;
    let rendered = template.render(context).map_err(|err| AppError::PromptAssembly {
        template: name.to_string(),
        reason: err.to_string(),
    })?;
    Ok(rendered.trim_end().to_string())
}

fn environment() -> Result<Environment<'static>, AppError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);

    for (name, source) in TEMPLATES {
        env.add_template(name, source).map_err(|err| AppError::PromptAssembly {
            template: name.to_string(),
            reason: err.to_string(),
        })?;
    }
    Ok(env)
}
