//! Names a source file mentions, gathered with `syn`.

use std::collections::BTreeSet;

use syn::visit::{self, Visit};

/// Everything the rules look at in one file.
#[derive(Debug, Default)]
pub struct Facts {
    /// Every path written in the file, `use` trees expanded.
    pub paths: BTreeSet<Vec<String>>,
    /// Last segment of every trait the file implements.
    pub implemented: BTreeSet<String>,
}

impl Facts {
    /// Collect facts from parsed source.
    pub fn gather(file: &syn::File) -> Self {
        let mut facts = Self::default();
        facts.visit_file(file);
        facts
    }

    fn expand_use(&mut self, tree: &syn::UseTree, prefix: &mut Vec<String>) {
        match tree {
            syn::UseTree::Path(step) => {
                prefix.push(step.ident.to_string());
                self.expand_use(&step.tree, prefix);
                prefix.pop();
            }
            syn::UseTree::Name(leaf) => self.record_leaf(prefix, leaf.ident.to_string()),
            syn::UseTree::Rename(leaf) => self.record_leaf(prefix, leaf.ident.to_string()),
            syn::UseTree::Glob(_) => self.record_leaf(prefix, "*".to_owned()),
            syn::UseTree::Group(group) => {
                for item in &group.items {
                    self.expand_use(item, prefix);
                }
            }
        }
    }

    fn record_leaf(&mut self, prefix: &[String], leaf: String) {
        let mut path = prefix.to_vec();
        path.push(leaf);
        self.paths.insert(path);
    }
}

impl<'ast> Visit<'ast> for Facts {
    fn visit_path(&mut self, node: &'ast syn::Path) {
        let segments: Vec<String> = node
            .segments
            .iter()
            .map(|segment| segment.ident.to_string())
            .collect();
        if !segments.is_empty() {
            self.paths.insert(segments);
        }
        visit::visit_path(self, node);
    }

    fn visit_item_use(&mut self, node: &'ast syn::ItemUse) {
        self.expand_use(&node.tree, &mut Vec::new());
    }

    fn visit_item_impl(&mut self, node: &'ast syn::ItemImpl) {
        if let Some((_, trait_path, _)) = &node.trait_ {
            if let Some(last) = trait_path.segments.last() {
                self.implemented.insert(last.ident.to_string());
            }
        }
        visit::visit_item_impl(self, node);
    }
}
