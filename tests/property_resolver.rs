// tests/property_resolver.rs

use proptest::prelude::*;

use multilaunch::errors::LaunchError;
use multilaunch::resolve::{resolve, serialize};

// Path segments without dots or separators, so generated paths contain
// exactly the markers each property puts there.
fn segment() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,8}"
}

fn base_strategy() -> impl Strategy<Value = (String, usize)> {
    proptest::collection::vec(segment(), 1..6).prop_map(|segs| {
        let depth = segs.len();
        (format!("/{}", segs.join("/")), depth)
    })
}

fn remainder_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(segment(), 1..4).prop_map(|segs| format!("{}.exe", segs.join("/")))
}

proptest! {
    #[test]
    fn plain_paths_are_concatenated((base, _) in base_strategy(), rest in remainder_strategy()) {
        prop_assert_eq!(resolve(&rest, &base).unwrap(), format!("{base}/{rest}"));
    }

    #[test]
    fn current_dir_marker_is_dropped((base, _) in base_strategy(), rest in remainder_strategy()) {
        let path = format!("./{rest}");
        prop_assert_eq!(resolve(&path, &base).unwrap(), format!("{base}/{rest}"));
    }

    #[test]
    fn parent_markers_drop_base_segments(
        (base, depth) in base_strategy(),
        ups in 1usize..8,
        rest in remainder_strategy(),
    ) {
        let path = format!("{}{rest}", "../".repeat(ups));
        let result = resolve(&path, &base);

        if ups > depth {
            let is_invalid = matches!(result, Err(LaunchError::InvalidPath { .. }));
            prop_assert!(is_invalid);
        } else {
            let kept: Vec<&str> = base.split('/').skip(1).take(depth - ups).collect();
            let expected = format!("/{}", kept.iter().map(|s| format!("{s}/")).collect::<String>());
            prop_assert_eq!(result.unwrap(), format!("{expected}{rest}"));
        }
    }

    #[test]
    fn resolve_is_idempotent((base, _) in base_strategy(), path in "(\\.\\./|\\./)?[a-z/]{1,12}\\.py") {
        let first = resolve(&path, &base).ok();
        let second = resolve(&path, &base).ok();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn serialized_args_have_one_trailing_space_each(args in proptest::collection::vec("[a-z-]{1,6}", 0..6)) {
        let line = serialize(&args);
        prop_assert_eq!(line.matches(' ').count(), args.len());
        prop_assert_eq!(line, args.iter().map(|a| format!("{a} ")).collect::<String>());
    }
}
