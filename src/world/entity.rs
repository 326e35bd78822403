use super::model::{Container, Object, ObjectId};

impl Object {
    /// Does this (already upper-cased) argument list name this object?
    ///
    /// Adjectives are stripped in registration order, each tried once against
    /// whatever is left, so "LARGE SMELLY TROUT" works for a trout registered
    /// with `["large", "smelly"]` but "SMELLY LARGE TROUT" does not.
    pub fn responds_to(&self, args: &[String]) -> bool {
        let joined = args.join(" ");
        let mut rest = joined.as_str();

        for adj in &self.adjectives {
            let prefix = format!("{} ", adj.to_uppercase());
            if let Some(stripped) = rest.strip_prefix(prefix.as_str()) {
                rest = stripped;
            }
        }

        if rest == self.name.to_uppercase() {
            return true;
        }
        self.aliases.iter().any(|a| rest == a.to_uppercase())
    }

    /// Listing form: "a Window (closed)".
    pub fn display_name(&self) -> String {
        let mut res = format!("a {}", self.name);
        if self.openable {
            res.push_str(if self.open { " (open)" } else { " (closed)" });
        }
        res
    }

    pub fn describe(&self) -> String {
        let mut res = self.desc.clone();
        if self.openable {
            if !res.is_empty() {
                res.push('\n');
            }
            let state = if self.open { "open" } else { "closed" };
            res.push_str(&format!("The {} is {}.", self.name, state));
        }
        res
    }
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, objs: impl IntoIterator<Item = ObjectId>) {
        self.objects.extend(objs);
    }

    /// Removes the first entry with this identity. Returns false (and changes
    /// nothing) when it isn't here.
    pub fn remove(&mut self, obj: ObjectId) -> bool {
        match self.objects.iter().position(|o| *o == obj) {
            Some(idx) => {
                self.objects.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, obj: ObjectId) -> bool {
        self.objects.contains(&obj)
    }

    pub fn ids(&self) -> &[ObjectId] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// "a Can, a Rug and a Trapdoor", skipping fixtures.
    /// `None` when nothing listable is here.
    pub fn object_names(&self, objects: &[Object]) -> Option<String> {
        let names: Vec<String> = self
            .objects
            .iter()
            .map(|id| &objects[id.0])
            .filter(|o| !o.fixture)
            .map(Object::display_name)
            .collect();

        match names.split_last() {
            None => None,
            Some((last, [])) => Some(last.clone()),
            Some((last, init)) => Some(format!("{} and {}", init.join(", "), last)),
        }
    }

    pub fn find(&self, objects: &[Object], args: &[String]) -> Option<ObjectId> {
        self.objects
            .iter()
            .copied()
            .find(|id| objects[id.0].responds_to(args))
    }
}
