use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Keys of the canned example claims, in display order.
pub const EXAMPLE_KEYS: [&str; 6] = [
    "plane_crash",
    "fire",
    "oil_spill",
    "celebrity_fake_death",
    "miracle_cure",
    "political_rumor",
];

/// Language of every user-facing string, including the example claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    English,
    Portuguese,
}

/// User-facing text for one locale.
#[derive(Debug)]
pub struct Strings {
    pub html_lang: &'static str,
    pub page_title: &'static str,
    pub validation_empty: &'static str,
    pub loading: &'static str,
    pub verdict_label: &'static str,
    pub summary_heading: &'static str,
    pub key_points_heading: &'static str,
    pub sources_heading: &'static str,
    pub event_real: &'static str,
    pub event_not_real: &'static str,
    pub error_title: &'static str,
    pub error_body: &'static str,
    pub details_label: &'static str,
    pub unknown_server_error: &'static str,
    pub unsuccessful_response: &'static str,
    examples: [&'static str; 6],
}

static ENGLISH: Strings = Strings {
    html_lang: "en",
    page_title: "News Investigator",
    validation_empty: "Please, provide a lead for the investigation.",
    loading: "Investigating...",
    verdict_label: "Verdict",
    summary_heading: "📄 Investigation Summary",
    key_points_heading: "✨ Key Points",
    sources_heading: "🔗 Consulted Sources",
    event_real: "The reported event appears to be real.",
    event_not_real: "The reported event could not be confirmed as real.",
    error_title: "An Error Occurred!",
    error_body: "It was not possible to complete the investigation. Please try again.",
    details_label: "Details",
    unknown_server_error: "Unknown server error.",
    unsuccessful_response: "The server response was not successful.",
    examples: [
        "Small aircraft crashes in Vinhedo, in the interior of São Paulo",
        "Large fire hits the National Museum in Rio de Janeiro",
        "Oil stains appear on beaches in northeastern Brazil",
        "Actor Sylvester Stallone dies at 71 years old",
        "Boldo tea cures cancer in 24 hours, says university study",
        "President of Central Bank announces he will confiscate Brazilians' savings",
    ],
};

static PORTUGUESE: Strings = Strings {
    html_lang: "pt-BR",
    page_title: "Investigador de Notícias",
    validation_empty: "Por favor, insira uma pista para a investigação.",
    loading: "Investigando...",
    verdict_label: "Veredito",
    summary_heading: "📄 Resumo da Apuração",
    key_points_heading: "🎯 Pontos-Chave",
    sources_heading: "🔗 Fontes Consultadas",
    event_real: "O evento relatado parece ser real.",
    event_not_real: "Não foi possível confirmar que o evento relatado é real.",
    error_title: "Erro na Investigação",
    error_body: "Não foi possível completar a apuração.",
    details_label: "Detalhe",
    unknown_server_error: "Erro desconhecido no servidor.",
    unsuccessful_response: "A resposta do servidor não foi bem-sucedida.",
    examples: [
        "Avião de pequeno porte cai em Vinhedo, no interior de São Paulo",
        "incêndio de grandes proporções atinge o Museu Nacional no Rio de Janeiro",
        "manchas de óleo aparecem em praias do nordeste brasileiro",
        "morre o ator Sylvester Stallone aos 71 anos",
        "Chá de boldo cura o câncer em 24 horas, diz estudo de universidade",
        "Presidente do Banco Central anuncia que vai confiscar a poupança dos brasileiros",
    ],
};

impl Locale {
    pub fn strings(self) -> &'static Strings {
        match self {
            Locale::English => &ENGLISH,
            Locale::Portuguese => &PORTUGUESE,
        }
    }

    /// Canned claim for an example key, if the key is known.
    pub fn example(self, key: &str) -> Option<&'static str> {
        EXAMPLE_KEYS
            .iter()
            .position(|known| *known == key)
            .map(|index| self.strings().examples[index])
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Portuguese => "pt",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown locale `{0}` (expected `en` or `pt`)")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "en-us" | "english" => Ok(Locale::English),
            "pt" | "pt-br" | "portuguese" => Ok(Locale::Portuguese),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}
