use clap::Subcommand;

use crate::{ctx_data::CtxData, Result};

pub mod deoida;
pub mod oida;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Translate Austrian text to German
    Translate {
        /// Text to translate; read from stdin when omitted
        text: Vec<String>,
    },
    /// Add or update a translation
    Add {
        /// Austrian phrase, may contain spaces
        austrian: String,
        /// German translation, may contain spaces
        german: String,
        /// Optional description
        #[arg(long, short)]
        description: Option<String>,
        /// Who added the translation
        #[arg(long, default_value = "cli")]
        added_by: String,
    },
    /// Show the stored translation of a phrase
    Lookup {
        /// Austrian phrase
        #[arg(required = true)]
        phrase: Vec<String>,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Translate { .. } => "translate",
            Self::Add { .. } => "add",
            Self::Lookup { .. } => "lookup",
        }
    }

    pub async fn run(self, ctx: &CtxData) -> Result<String> {
        match self {
            Self::Translate { text } => {
                let text = deoida::text_to_translate(&text).await?;
                deoida::deoida(&ctx.dictionary, &text).await
            }
            Self::Add {
                austrian,
                german,
                description,
                added_by,
            } => {
                oida::oida(
                    &ctx.dictionary,
                    &added_by,
                    &austrian,
                    &german,
                    description.as_deref(),
                )
                .await
            }
            Self::Lookup { phrase } => oida::lookup(&ctx.dictionary, &phrase.join(" ")).await,
        }
    }
}
