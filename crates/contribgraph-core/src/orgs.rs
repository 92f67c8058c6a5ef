//! Organization presets and the `name[:hex[:label]]` option mini-language.

use crate::model::Organization;

/// Fill used for organizations without a known color.
pub const DEFAULT_ORG_COLOR: &str = "#39d353";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub color: &'static str,
    pub label: &'static str,
    /// GitHub organization to query when it differs from the preset name.
    pub login: Option<&'static str>,
}

const fn p(color: &'static str, label: &'static str) -> Preset {
    Preset {
        color,
        label,
        login: None,
    }
}

const fn p_in(color: &'static str, label: &'static str, login: &'static str) -> Preset {
    Preset {
        color,
        label,
        login: Some(login),
    }
}

// Brand colors for common OSS organizations.
const PRESETS: &[(&str, Preset)] = &[
    // JavaScript / frontend
    ("vercel", p("#000000", "Vercel")),
    ("facebook", p("#0081FB", "Facebook")),
    ("react", p_in("#61DAFB", "React", "facebook")),
    ("vuejs", p("#42B883", "Vue.js")),
    ("angular", p("#DD0031", "Angular")),
    ("sveltejs", p("#FF3E00", "Svelte")),
    ("nodejs", p("#339933", "Node.js")),
    ("denoland", p("#000000", "Deno")),
    ("htmx", p_in("#3366CC", "htmx", "bigskysoftware")),
    ("bigskysoftware", p("#3366CC", "htmx")),
    // Backend / infrastructure
    ("rails", p("#CC0000", "Rails")),
    ("django", p("#092E20", "Django")),
    ("laravel", p("#FF2D20", "Laravel")),
    ("spring", p("#6DB33F", "Spring")),
    ("spring-projects", p("#6DB33F", "Spring")),
    ("fastapi", p("#009688", "FastAPI")),
    ("tiangolo", p("#009688", "FastAPI")),
    // Cloud / DevOps
    ("kubernetes", p("#326CE5", "Kubernetes")),
    ("docker", p("#2496ED", "Docker")),
    ("hashicorp", p("#000000", "HashiCorp")),
    ("terraform", p_in("#7B42BC", "Terraform", "hashicorp")),
    // Languages
    ("rust-lang", p("#DEA584", "Rust")),
    ("golang", p("#00ADD8", "Go")),
    ("python", p("#3776AB", "Python")),
    ("ruby", p("#CC342D", "Ruby")),
    ("ruby-lang", p("#CC342D", "Ruby")),
    ("elixir", p("#4B275F", "Elixir")),
    ("elixir-lang", p("#4B275F", "Elixir")),
    // Big tech
    ("microsoft", p("#00A4EF", "Microsoft")),
    ("google", p("#4285F4", "Google")),
    ("aws", p("#FF9900", "AWS")),
    ("apple", p("#000000", "Apple")),
    // AI / ML
    ("tensorflow", p("#FF6F00", "TensorFlow")),
    ("pytorch", p("#EE4C2C", "PyTorch")),
    ("huggingface", p("#FFD21E", "Hugging Face")),
    ("openai", p("#412991", "OpenAI")),
    // Scientific computing / computer vision
    ("cupy", p("#46C0B6", "CuPy")),
    ("opencv", p("#5C3EE8", "OpenCV")),
    ("numpy", p("#013243", "NumPy")),
    ("scipy", p("#8CAAE6", "SciPy")),
    // Databases
    ("postgresql", p("#4169E1", "PostgreSQL")),
    ("mongodb", p("#47A248", "MongoDB")),
    ("redis", p("#DC382D", "Redis")),
    // Tools
    ("github", p("#181717", "GitHub")),
    ("gitlab", p("#FC6D26", "GitLab")),
    ("jetbrains", p("#000000", "JetBrains")),
    // Hotwire ecosystem
    ("hotwired", p("#1a1a1a", "Hotwire")),
];

const ALIASES: &[(&str, &str)] = &[
    ("fb", "facebook"),
    ("reactjs", "react"),
    ("vue", "vuejs"),
    ("node", "nodejs"),
    ("deno", "denoland"),
    ("rust", "rust-lang"),
    ("go", "golang"),
    ("py", "python"),
    ("rb", "ruby"),
    ("k8s", "kubernetes"),
    ("tf", "terraform"),
    ("hf", "huggingface"),
    ("pg", "postgresql"),
    ("mongo", "mongodb"),
    ("cv", "opencv"),
    ("opencv-python", "opencv"),
];

fn lookup_preset(name: &str) -> Option<Preset> {
    PRESETS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, preset)| *preset)
}

fn alias_target(name: &str) -> Option<&'static str> {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, target)| *target)
}

/// Preset for an organization name or alias (case-insensitive).
pub fn preset(name: &str) -> Option<Preset> {
    let normalized = name.trim().to_ascii_lowercase();
    match alias_target(&normalized) {
        Some(target) => lookup_preset(target),
        None => lookup_preset(&normalized),
    }
}

/// The GitHub organization login to query for `name`.
///
/// Some presets live under another organization (`react` is published by `facebook`); aliases
/// resolve to their canonical name; anything else is used as-is (lowercased).
pub fn github_login(name: &str) -> String {
    if let Some(login) = preset(name).and_then(|p| p.login) {
        return login.to_string();
    }
    let normalized = name.trim().to_ascii_lowercase();
    match alias_target(&normalized) {
        Some(target) => target.to_string(),
        None => normalized,
    }
}

/// Organization for a bare identifier.
///
/// Known presets and aliases contribute their color and label and are renamed to the GitHub
/// organization that hosts them (`k8s` becomes `kubernetes`, `react` becomes `facebook`).
/// Anything else keeps its name, gets [`DEFAULT_ORG_COLOR`] and is labelled with its name.
pub fn resolve(raw: &str) -> Organization {
    let name = raw.trim();
    match preset(name) {
        Some(p) => Organization::new(&github_login(name), p.color, p.label),
        None => Organization::new(name, DEFAULT_ORG_COLOR, name),
    }
}

/// Colors handed out, in order, to auto-detected organizations without a preset.
pub const AUTO_DETECT_PALETTE: &[&str] = &[
    "#2F81F7", "#E3663A", "#2DA44E", "#A371F7", "#D4A72C", "#DB61A2", "#1B7C83", "#BF3989",
    "#8C959F", "#0969DA", "#953800", "#116329",
];

/// Organization for the `index`-th auto-detected login: preset color and label when known,
/// otherwise the palette color at `index` (cycling) labelled with the login.
pub fn auto_detect_organization(login: &str, index: usize) -> Organization {
    match preset(login) {
        Some(p) => Organization::new(login, p.color, p.label),
        None => {
            let color = AUTO_DETECT_PALETTE[index % AUTO_DETECT_PALETTE.len()];
            Organization::new(login, color, login.trim())
        }
    }
}

/// Organizations shown when the caller does not pick any.
pub fn default_orgs() -> Vec<Organization> {
    vec![
        Organization::new("rails", "#CC0000", "Rails"),
        Organization::new("hotwired", "#1a1a1a", "Hotwire"),
    ]
}

/// Parses `rails:CC0000:Rails,hotwired:1a1a1a:Hotwire`.
///
/// Each entry is `name[:hex[:label]]`, the color written without `#`:
/// - a bare `name` goes through [`resolve`] (presets, aliases, identity defaults);
/// - an empty or missing color segment becomes [`DEFAULT_ORG_COLOR`];
/// - an empty or missing label segment becomes the name.
///
/// Blank entries are skipped. A missing or blank spec yields [`default_orgs`].
pub fn parse_orgs(spec: Option<&str>) -> Vec<Organization> {
    let Some(spec) = spec.map(str::trim).filter(|s| !s.is_empty()) else {
        return default_orgs();
    };

    let mut out = Vec::new();
    for entry in spec.split(',') {
        if !entry.contains(':') {
            if !entry.trim().is_empty() {
                out.push(resolve(entry));
            }
            continue;
        }

        let mut parts = entry.split(':');
        let name = parts.next().unwrap_or_default().trim();
        if name.is_empty() {
            continue;
        }
        let color = match parts.next().map(str::trim).filter(|s| !s.is_empty()) {
            Some(hex) => format!("#{hex}"),
            None => DEFAULT_ORG_COLOR.to_string(),
        };
        let label = parts
            .next()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(name);
        out.push(Organization::new(name, color, label));
    }

    if out.is_empty() {
        return default_orgs();
    }
    out
}
