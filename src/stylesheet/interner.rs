use crate::config::ClassNaming;
use crate::declaration::Declaration;
use std::collections::HashMap;

/// Assigns one class name per unique declaration.
///
/// Entries keep their first-intern order, which is also the order rules are
/// emitted in.
#[derive(Debug, Default)]
pub struct ClassInterner {
    naming: ClassNaming,
    prefix: String,
    entries: Vec<(String, Declaration)>,
    lookup: HashMap<Declaration, usize>,
    per_property: HashMap<String, usize>,
}

impl ClassInterner {
    pub fn new(naming: ClassNaming, prefix: Option<&str>) -> Self {
        Self {
            naming,
            prefix: prefix.unwrap_or_default().to_string(),
            ..Self::default()
        }
    }

    /// Returns the class for `declaration`, creating it on first sight.
    pub fn intern(&mut self, declaration: &Declaration) -> &str {
        let index = match self.lookup.get(declaration) {
            Some(&index) => index,
            None => {
                let name = self.next_name(&declaration.property);
                tracing::trace!(class = %name, property = %declaration.property, "interned style class");
                let index = self.entries.len();
                self.entries.push((name, declaration.clone()));
                self.lookup.insert(declaration.clone(), index);
                index
            }
        };
        &self.entries[index].0
    }

    pub fn entries(&self) -> &[(String, Declaration)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn next_name(&mut self, property: &str) -> String {
        match self.naming {
            ClassNaming::Property => {
                let stem = property.trim_start_matches('-');
                let counter = self.per_property.entry(stem.to_string()).or_insert(0);
                let name = format!("{}{}-{}", self.prefix, stem, counter);
                *counter += 1;
                name
            }
            ClassNaming::Compact => format!("{}c{}", self.prefix, base36(self.entries.len())),
        }
    }
}

fn base36(mut n: usize) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[n % 36]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_declarations_share_a_class() {
        let mut interner = ClassInterner::new(ClassNaming::Property, None);
        let a = interner.intern(&Declaration::new("padding", "16px")).to_string();
        let b = interner.intern(&Declaration::new("padding", "16px")).to_string();
        assert_eq!(a, "padding-0");
        assert_eq!(a, b);
        assert_eq!(interner.len(), 1);
    }

    #[test]
    fn counters_are_per_property() {
        let mut interner = ClassInterner::new(ClassNaming::Property, None);
        interner.intern(&Declaration::new("padding", "1px"));
        interner.intern(&Declaration::new("color", "red"));
        let name = interner.intern(&Declaration::new("padding", "2px")).to_string();
        assert_eq!(name, "padding-1");
    }

    #[test]
    fn compact_names_with_prefix() {
        let mut interner = ClassInterner::new(ClassNaming::Compact, Some("x-"));
        for i in 0..37 {
            interner.intern(&Declaration::new("width", format!("{}px", i)));
        }
        assert_eq!(interner.entries()[0].0, "x-c0");
        assert_eq!(interner.entries()[36].0, "x-c10");
    }

    #[test]
    fn vendor_prefixes_are_trimmed() {
        let mut interner = ClassInterner::new(ClassNaming::Property, None);
        let name = interner.intern(&Declaration::new("--brand-hue", "210")).to_string();
        assert_eq!(name, "brand-hue-0");
    }
}
