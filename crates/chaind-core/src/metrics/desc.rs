use crate::error::RegistryError;

/// Options shared by every metric constructor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Opts {
    pub namespace: String,
    pub name: String,
    pub help: String,
}

impl Opts {
    pub fn new(name: impl Into<String>, help: impl Into<String>) -> Self {
        Self {
            namespace: String::new(),
            name: name.into(),
            help: help.into(),
        }
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// `<namespace>_<name>`, or just `name` without a namespace.
    pub fn fq_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}_{}", self.namespace, self.name)
        }
    }
}

/// Validated metric descriptor: fully-qualified name, help and label names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Desc {
    fq_name: String,
    help: String,
    label_names: Vec<String>,
}

impl Desc {
    pub fn new(opts: &Opts, label_names: &[&str]) -> Result<Self, RegistryError> {
        let fq_name = opts.fq_name();
        if !is_valid_metric_name(&fq_name) {
            return Err(RegistryError::InvalidDescriptor(format!(
                "{fq_name:?} is not a valid metric name"
            )));
        }
        if opts.help.is_empty() {
            return Err(RegistryError::InvalidDescriptor(format!(
                "{fq_name}: help text must not be empty"
            )));
        }

        let mut labels: Vec<String> = Vec::with_capacity(label_names.len());
        for l in label_names {
            if !is_valid_label_name(l) {
                return Err(RegistryError::InvalidDescriptor(format!(
                    "{fq_name}: {l:?} is not a valid label name"
                )));
            }
            if labels.iter().any(|x| x == l) {
                return Err(RegistryError::InvalidDescriptor(format!(
                    "{fq_name}: duplicate label name {l:?}"
                )));
            }
            labels.push(l.to_string());
        }

        Ok(Self {
            fq_name,
            help: opts.help.clone(),
            label_names: labels,
        })
    }

    pub fn fq_name(&self) -> &str {
        &self.fq_name
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn label_names(&self) -> &[String] {
        &self.label_names
    }
}

/// `[a-zA-Z_:][a-zA-Z0-9_:]*`
fn is_valid_metric_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == ':' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':')
}

/// `[a-zA-Z_][a-zA-Z0-9_]*`, `__` prefix reserved.
fn is_valid_label_name(name: &str) -> bool {
    if name.starts_with("__") {
        return false;
    }
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

