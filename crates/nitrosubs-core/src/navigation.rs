//! Static navigation table and the role filter over it
//!
//! The table is process-wide configuration: a main section that everyone
//! sees (with individually gated entries) and an admin section gated as a
//! whole. [`build_menu`] turns it into the menu for one render.

use serde::Serialize;

use crate::models::{Capability, CapabilitySet};

/// Lucide icon shown next to an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    LayoutDashboard,
    Receipt,
    CheckSquare,
    Bell,
    Building2,
    FolderTree,
    Tag,
    Users,
}

impl Icon {
    /// Lucide icon name
    pub fn name(self) -> &'static str {
        match self {
            Icon::LayoutDashboard => "layout-dashboard",
            Icon::Receipt => "receipt",
            Icon::CheckSquare => "check-square",
            Icon::Bell => "bell",
            Icon::Building2 => "building-2",
            Icon::FolderTree => "folder-tree",
            Icon::Tag => "tag",
            Icon::Users => "users",
        }
    }
}

/// One link in the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub icon: Icon,
    pub label: &'static str,
    pub route: &'static str,
    /// Capability the session must hold to see this entry
    pub requires: Option<Capability>,
}

impl NavEntry {
    const fn open(icon: Icon, label: &'static str, route: &'static str) -> Self {
        Self {
            icon,
            label,
            route,
            requires: None,
        }
    }

    const fn gated(icon: Icon, label: &'static str, route: &'static str, cap: Capability) -> Self {
        Self {
            icon,
            label,
            route,
            requires: Some(cap),
        }
    }
}

/// Which block of the sidebar a section renders in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Main,
    Admin,
}

/// Section definition: heading, gate and ordered entries
#[derive(Debug, Clone, Copy)]
pub struct NavSection {
    pub kind: SectionKind,
    pub heading: Option<&'static str>,
    /// Hides the whole section (heading included) when not held
    pub requires: Option<Capability>,
    pub entries: &'static [NavEntry],
}

pub const MAIN_ENTRIES: &[NavEntry] = &[
    NavEntry::open(Icon::LayoutDashboard, "Dashboard", "/dashboard"),
    NavEntry::open(Icon::Receipt, "Despesas", "/expenses"),
    NavEntry::gated(Icon::CheckSquare, "Validações", "/validations", Capability::Leader),
    NavEntry::open(Icon::Bell, "Alertas", "/alerts"),
];

pub const ADMIN_ENTRIES: &[NavEntry] = &[
    NavEntry::open(Icon::Building2, "Empresas", "/companies"),
    NavEntry::open(Icon::FolderTree, "Setores", "/departments"),
    NavEntry::open(Icon::Tag, "Categorias", "/categories"),
    NavEntry::open(Icon::Users, "Usuários", "/users"),
];

pub static SECTIONS: &[NavSection] = &[
    NavSection {
        kind: SectionKind::Main,
        heading: None,
        requires: None,
        entries: MAIN_ENTRIES,
    },
    NavSection {
        kind: SectionKind::Admin,
        heading: Some("Cadastros"),
        requires: Some(Capability::Admin),
        entries: ADMIN_ENTRIES,
    },
];

/// Exact match only: `/expenses/42` does not activate `/expenses`
pub fn is_active(route: &str, current_path: &str) -> bool {
    route == current_path
}

/// Every entry of the table, in render order, ignoring gates
pub fn all_entries() -> impl Iterator<Item = &'static NavEntry> {
    SECTIONS.iter().flat_map(|section| section.entries.iter())
}

/// Look up the entry whose route is exactly `path`
pub fn entry_for_route(path: &str) -> Option<&'static NavEntry> {
    all_entries().find(|entry| is_active(entry.route, path))
}

/// Capabilities needed to open `path`: the section gate plus the entry gate.
/// `None` when `path` is not a menu route.
pub fn route_requirement(path: &str) -> Option<CapabilitySet> {
    SECTIONS.iter().find_map(|section| {
        section
            .entries
            .iter()
            .find(|entry| is_active(entry.route, path))
            .map(|entry| {
                let mut required = CapabilitySet::from(section.requires);
                if let Some(cap) = entry.requires {
                    required = required.with(cap);
                }
                required
            })
    })
}

/// Entry as rendered: the static definition plus its active flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    #[serde(flatten)]
    pub entry: &'static NavEntry,
    pub active: bool,
}

/// Visible section with its filtered items
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavSectionView {
    pub kind: SectionKind,
    pub heading: Option<&'static str>,
    pub items: Vec<NavItem>,
}

/// Menu for one render
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NavMenu {
    pub sections: Vec<NavSectionView>,
}

impl NavMenu {
    pub fn section(&self, kind: SectionKind) -> Option<&NavSectionView> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    pub fn items(&self) -> impl Iterator<Item = &NavItem> {
        self.sections.iter().flat_map(|s| s.items.iter())
    }

    /// The single active item, if the current path is a menu route
    pub fn active(&self) -> Option<&NavItem> {
        self.items().find(|item| item.active)
    }

    pub fn labels(&self, kind: SectionKind) -> Vec<&'static str> {
        self.section(kind)
            .map(|s| s.items.iter().map(|item| item.entry.label).collect())
            .unwrap_or_default()
    }
}

/// Filter the table for `capabilities` and mark the entry matching `current_path`
pub fn build_menu(capabilities: CapabilitySet, current_path: &str) -> NavMenu {
    let sections = SECTIONS
        .iter()
        .filter(|section| capabilities.satisfies(section.requires))
        .map(|section| NavSectionView {
            kind: section.kind,
            heading: section.heading,
            items: section
                .entries
                .iter()
                .filter(|entry| capabilities.satisfies(entry.requires))
                .map(|entry| NavItem {
                    entry,
                    active: is_active(entry.route, current_path),
                })
                .collect(),
        })
        .collect();

    NavMenu { sections }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leader() -> CapabilitySet {
        CapabilitySet::from_flags(false, true)
    }

    #[test]
    fn test_leader_gate_on_main_entry() {
        let without = build_menu(CapabilitySet::empty(), "/dashboard");
        assert_eq!(
            without.labels(SectionKind::Main),
            vec!["Dashboard", "Despesas", "Alertas"]
        );

        let with = build_menu(leader(), "/dashboard");
        assert_eq!(
            with.labels(SectionKind::Main),
            vec!["Dashboard", "Despesas", "Validações", "Alertas"]
        );
    }

    #[test]
    fn test_admin_section_all_or_nothing() {
        let menu = build_menu(leader(), "/dashboard");
        assert!(menu.section(SectionKind::Admin).is_none());
        assert_eq!(menu.sections.len(), 1);

        let menu = build_menu(CapabilitySet::from_flags(true, false), "/dashboard");
        let admin = menu.section(SectionKind::Admin).unwrap();
        assert_eq!(admin.heading, Some("Cadastros"));
        assert_eq!(admin.items.len(), ADMIN_ENTRIES.len());
    }

    #[test]
    fn test_exactly_one_active_entry_for_each_route() {
        let all = CapabilitySet::from_flags(true, true);
        for entry in all_entries() {
            let menu = build_menu(all, entry.route);
            let active: Vec<_> = menu.items().filter(|i| i.active).collect();
            assert_eq!(active.len(), 1, "route {}", entry.route);
            assert_eq!(active[0].entry.route, entry.route);
        }
    }

    #[test]
    fn test_no_active_entry_off_menu() {
        let all = CapabilitySet::from_flags(true, true);
        for path in ["/", "/login", "/expenses/42", "/Dashboard", "/dashboard/"] {
            assert!(build_menu(all, path).active().is_none(), "path {path}");
        }
    }

    #[test]
    fn test_hidden_entry_is_never_active() {
        let menu = build_menu(CapabilitySet::empty(), "/validations");
        assert!(menu.active().is_none());
    }

    #[test]
    fn test_entry_for_route() {
        assert_eq!(entry_for_route("/users").map(|e| e.label), Some("Usuários"));
        assert!(entry_for_route("/users/1").is_none());
    }

    #[test]
    fn test_route_requirement_includes_section_gate() {
        let admin = CapabilitySet::empty().with(Capability::Admin);
        for route in ["/companies", "/departments", "/categories", "/users"] {
            assert_eq!(route_requirement(route), Some(admin), "route {route}");
        }
        assert_eq!(
            route_requirement("/validations"),
            Some(CapabilitySet::empty().with(Capability::Leader))
        );
        assert_eq!(route_requirement("/dashboard"), Some(CapabilitySet::empty()));
        assert_eq!(route_requirement("/users/1"), None);
    }

    #[test]
    fn test_route_requirement_agrees_with_menu() {
        let sets = [
            CapabilitySet::empty(),
            leader(),
            CapabilitySet::from_flags(true, false),
            CapabilitySet::from_flags(true, true),
        ];
        for caps in sets {
            let menu = build_menu(caps, "/dashboard");
            for entry in all_entries() {
                let listed = menu.items().any(|item| item.entry.route == entry.route);
                let reachable = route_requirement(entry.route).is_some_and(|req| caps.covers(req));
                assert_eq!(listed, reachable, "route {} caps {:?}", entry.route, caps);
            }
        }
    }

    #[test]
    fn test_routes_are_unique() {
        let mut routes: Vec<_> = all_entries().map(|e| e.route).collect();
        routes.sort_unstable();
        routes.dedup();
        assert_eq!(routes.len(), MAIN_ENTRIES.len() + ADMIN_ENTRIES.len());
    }

    #[test]
    fn test_menu_json_shape() {
        let menu = build_menu(leader(), "/validations");
        let json = serde_json::to_value(&menu).unwrap();
        let item = &json["sections"][0]["items"][2];
        assert_eq!(item["label"], "Validações");
        assert_eq!(item["icon"], "check-square");
        assert_eq!(item["active"], true);
    }
}
