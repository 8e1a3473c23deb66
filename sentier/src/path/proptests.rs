//! Exhaustive property-based tests across parsing, algebra, and
//! resolution.
//!
//! These run with a much higher case count than the per-module property
//! tests and are gated behind the `property-tests` feature:
//!
//! ```text
//! cargo test --features property-tests
//! ```

use proptest::prelude::*;

use crate::atom::Atom;
use crate::factory::PathFactory;
use crate::flavor::Flavor;
use crate::parser::parse;
use crate::path::absolute::AbsolutePath;
use crate::path::any::AnyPath;
use crate::path::normalize::PathNormalizer;
use crate::path::relationship::PathRelationship;
use crate::path::relative::RelativePath;
use crate::path::resolve::{BasePathResolver, NormalizingResolver};

fn atom_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,12}"
}

fn atoms_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(atom_strategy(), 1..6)
}

fn dotted_atoms_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop_oneof![
            4 => atom_strategy().boxed(),
            1 => Just(".".to_string()).boxed(),
            1 => Just("..".to_string()).boxed(),
        ],
        1..8,
    )
}

fn raw_text_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.:/\\\\ -]{0,40}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn absolute_paths_round_trip_through_rendering(atoms in atoms_strategy()) {
        let path = AbsolutePath::new(atoms, Flavor::Generic).unwrap();
        let reparsed = PathFactory::generic()
            .create_absolute(&path.to_string())
            .unwrap();
        prop_assert_eq!(reparsed, path);
    }

    #[test]
    fn relative_paths_round_trip_through_rendering(atoms in atoms_strategy()) {
        let path = RelativePath::new(atoms, Flavor::Generic).unwrap();
        let reparsed = PathFactory::generic()
            .create_relative(&path.to_string())
            .unwrap();
        prop_assert_eq!(reparsed, path);
    }

    #[test]
    fn trailing_separators_round_trip(atoms in atoms_strategy()) {
        let path = AbsolutePath::new(atoms, Flavor::Generic)
            .unwrap()
            .join_trailing_separator()
            .unwrap();
        let rendered = path.to_string();
        prop_assert!(rendered.ends_with('/'));
        let reparsed = PathFactory::generic().create_absolute(&rendered).unwrap();
        prop_assert!(reparsed.has_trailing_separator());
        prop_assert_eq!(reparsed, path);
    }

    #[test]
    fn parsing_never_yields_empty_atoms(raw in raw_text_strategy()) {
        for flavor in [Flavor::Generic, Flavor::Unix, Flavor::Windows] {
            let parsed = parse(&raw, flavor);
            prop_assert!(parsed.atoms.iter().all(|atom| !atom.is_empty()));
        }
    }

    #[test]
    fn normalization_is_idempotent(atoms in dotted_atoms_strategy()) {
        let absolute = AbsolutePath::new(atoms.clone(), Flavor::Generic).unwrap();
        let once = absolute.normalize();
        prop_assert_eq!(once.normalize(), once.clone());

        let relative = RelativePath::new(atoms, Flavor::Generic).unwrap();
        let once = relative.normalize();
        prop_assert_eq!(once.normalize(), once);
    }

    #[test]
    fn normalized_absolute_paths_contain_only_real_atoms(atoms in dotted_atoms_strategy()) {
        let path = AbsolutePath::new(atoms, Flavor::Generic).unwrap();
        prop_assert!(path.normalize().atoms().iter().all(Atom::is_real));
    }

    #[test]
    fn join_is_associative(
        first in atoms_strategy(),
        second in atoms_strategy(),
        third in atoms_strategy(),
    ) {
        let a = RelativePath::new(first, Flavor::Generic).unwrap();
        let b = RelativePath::new(second, Flavor::Generic).unwrap();
        let c = RelativePath::new(third, Flavor::Generic).unwrap();
        prop_assert_eq!(a.join(&b).join(&c), a.join(&b.join(&c)));
    }

    #[test]
    fn joining_here_then_normalizing_is_identity(atoms in atoms_strategy()) {
        let here = RelativePath::here(Flavor::Generic);
        let path = RelativePath::new(atoms, Flavor::Generic).unwrap();
        prop_assert_eq!(here.join(&path).normalize(), path.normalize());
    }

    #[test]
    fn atom_at_negative_one_is_the_name(atoms in atoms_strategy()) {
        let path = RelativePath::new(atoms, Flavor::Generic).unwrap();
        prop_assert_eq!(path.atom_at(-1).unwrap().as_str(), path.name().unwrap());
    }

    #[test]
    fn resolution_appends_without_normalizing(
        base_atoms in atoms_strategy(),
        rel_atoms in dotted_atoms_strategy(),
    ) {
        let base = AbsolutePath::new(base_atoms.clone(), Flavor::Generic).unwrap();
        let rel = RelativePath::new(rel_atoms.clone(), Flavor::Generic).unwrap();
        let resolved = BasePathResolver::new(Flavor::Generic)
            .resolve(&base, &AnyPath::Relative(rel));
        let expected: Vec<String> = base_atoms.into_iter().chain(rel_atoms).collect();
        let actual: Vec<&str> = resolved.atoms().iter().map(Atom::as_str).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn normalizing_resolution_composes(
        base_atoms in atoms_strategy(),
        rel_atoms in dotted_atoms_strategy(),
    ) {
        let base = AbsolutePath::new(base_atoms, Flavor::Generic).unwrap();
        let rel = AnyPath::Relative(RelativePath::new(rel_atoms, Flavor::Generic).unwrap());
        let normalizer = PathNormalizer::new(Flavor::Generic);
        let plain = BasePathResolver::new(Flavor::Generic).resolve(&base, &rel);
        let composed = NormalizingResolver::new(Flavor::Generic).resolve(&base, &rel);
        prop_assert_eq!(normalizer.normalize_absolute(&plain), composed);
    }

    #[test]
    fn parents_are_ancestors(atoms in atoms_strategy()) {
        let path = AbsolutePath::new(atoms, Flavor::Generic).unwrap();
        let parent = path.parent();
        prop_assert!(parent.is_ancestor_of(&path));
        prop_assert!(!path.is_ancestor_of(&parent));
    }

    #[test]
    fn relationship_is_antisymmetric(
        left_atoms in dotted_atoms_strategy(),
        right_atoms in dotted_atoms_strategy(),
    ) {
        let left = AbsolutePath::new(left_atoms, Flavor::Generic).unwrap();
        let right = AbsolutePath::new(right_atoms, Flavor::Generic).unwrap();
        let forward = PathRelationship::between_absolute(&left, &right);
        let backward = PathRelationship::between_absolute(&right, &left);
        let expected = match forward {
            PathRelationship::Ancestor => PathRelationship::Descendant,
            PathRelationship::Descendant => PathRelationship::Ancestor,
            PathRelationship::Same => PathRelationship::Same,
            PathRelationship::Unrelated => PathRelationship::Unrelated,
        };
        prop_assert_eq!(backward, expected);
    }
}
