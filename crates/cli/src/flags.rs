use clap::ValueEnum;
use wordsearch_protocol::CaseMode;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub(crate) enum CaseFlag {
    Upper,
    Lower,
    Preserve,
}

impl CaseFlag {
    pub(crate) const fn as_domain(self) -> CaseMode {
        match self {
            CaseFlag::Upper => CaseMode::Upper,
            CaseFlag::Lower => CaseMode::Lower,
            CaseFlag::Preserve => CaseMode::Preserve,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}
