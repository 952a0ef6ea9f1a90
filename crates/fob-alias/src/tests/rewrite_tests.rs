//! End-to-end rewriting scenarios.

use std::path::Path;

use crate::{AliasMap, rewrite};

fn project_aliases() -> AliasMap {
    AliasMap::from_entries([("@", "/p/src"), ("~sub", "/p/src/sub")]).unwrap()
}

#[test]
fn test_round_trip_mapping() {
    let aliases = AliasMap::from_entries([("@", "/p/src")]).unwrap();
    let result = rewrite(
        Path::new("/p/src/components/Btn.tsx"),
        r#"import { fmt } from "../utils/fmt";"#,
        &aliases,
    );

    assert!(result.modified);
    assert_eq!(result.text, r#"import { fmt } from "@/utils/fmt";"#);
}

#[test]
fn test_first_listed_alias_wins() {
    let result = rewrite(
        Path::new("/p/src/lib/index.ts"),
        r#"import a from "../sub/a";"#,
        &project_aliases(),
    );

    assert_eq!(result.text, r#"import a from "@/sub/a";"#);
}

#[test]
fn test_out_of_root_untouched() {
    let source = r#"import lib from "../../outside/lib";"#;
    let result = rewrite(Path::new("/p/src/index.ts"), source, &project_aliases());

    assert!(!result.modified);
    assert_eq!(result.text, source);
}

#[test]
fn test_sibling_directory_with_shared_prefix_untouched() {
    let aliases = AliasMap::from_entries([("@", "/p/src")]).unwrap();
    let source = r#"import x from "../src2/x";"#;
    let result = rewrite(Path::new("/p/src/index.ts"), source, &aliases);

    assert!(!result.modified);
    assert_eq!(result.text, source);
}

#[test]
fn test_both_syntaxes_rewritten_consistently() {
    let source = r#"import x from "../a/b";
const y = require("../a/b");
"#;
    let result = rewrite(Path::new("/p/src/pages/home.ts"), source, &project_aliases());

    assert_eq!(
        result.text,
        r#"import x from "@/a/b";
const y = require("@/a/b");
"#
    );
    assert_eq!(result.rewrites.len(), 2);
    assert_eq!(result.rewrites[0].replacement, result.rewrites[1].replacement);
}

#[test]
fn test_non_relative_specifiers_pass_through() {
    let source = r#"import React from "react";
import { x } from "@/already/aliased";
import y from "~sub/y";
import z from "/absolute/z";
const fs = require("node:fs");
const lazy = import("lodash/debounce");
"#;
    let result = rewrite(Path::new("/p/src/index.ts"), source, &project_aliases());

    assert!(!result.modified);
    assert_eq!(result.text, source);
}

#[test]
fn test_idempotent_on_mixed_file() {
    let path = Path::new("/p/src/features/cart/Cart.tsx");
    let source = r#"import React from "react";
import { Button } from "../../components/Button";
import type { Item } from "./types";
import styles from './Cart.module.css';
const api = require("../../../server/api");
const Lazy = import("../checkout/Lazy");
"#;
    let aliases = project_aliases();

    let first = rewrite(path, source, &aliases);
    assert!(first.modified);
    assert_eq!(
        first.text,
        r#"import React from "react";
import { Button } from "@/components/Button";
import type { Item } from "@/features/cart/types";
import styles from '@/features/cart/Cart.module.css';
const api = require("../../../server/api");
const Lazy = import("@/features/checkout/Lazy");
"#
    );

    let second = rewrite(path, &first.text, &aliases);
    assert!(!second.modified);
    assert_eq!(second.text, first.text);
}

#[test]
fn test_no_hidden_state_between_files() {
    let aliases = project_aliases();
    let source = r#"import a from "./a";"#;

    let in_src = rewrite(Path::new("/p/src/x.ts"), source, &aliases);
    let outside = rewrite(Path::new("/p/scripts/x.ts"), source, &aliases);
    let in_src_again = rewrite(Path::new("/p/src/x.ts"), source, &aliases);

    assert_eq!(in_src.text, r#"import a from "@/a";"#);
    assert!(!outside.modified);
    assert_eq!(in_src, in_src_again);
}

#[test]
fn test_file_outside_aliases_importing_into_alias() {
    let aliases = AliasMap::from_entries([("@", "/p/src")]).unwrap();
    let result = rewrite(
        Path::new("/p/tests/app.test.ts"),
        r#"import { app } from "../src/app";"#,
        &aliases,
    );

    assert_eq!(result.text, r#"import { app } from "@/app";"#);
}

#[test]
fn test_malformed_imports_are_ignored() {
    let source = "import { a } from \"../a\nconst b = require('../b\";\n";
    let result = rewrite(Path::new("/p/src/x/y.ts"), source, &project_aliases());

    assert!(!result.modified);
    assert_eq!(result.text, source);
}
