use super::*;

const FORM: &str = r#"<form id="signup" class="hs-form stacked">
  <fieldset class="row">
    <label for="budget">Budget</label>
    <input id="budget" name="budget" class="hs-input wide" data-kind="money-eur">
    <span class="hint">in euros</span>
  </fieldset>
  <div class="row"><input id="email" name="email" type="email" required></div>
</form>"#;

fn ids(doc: &Document, nodes: Vec<NodeId>) -> Vec<String> {
    nodes
        .into_iter()
        .filter_map(|node| doc.attribute(node, "id"))
        .collect()
}

#[test]
fn id_class_and_tag_selectors_match() -> Result<()> {
    let doc = quiet(FORM)?;

    assert_eq!(ids(&doc, doc.query_selector_all("#budget")?), vec!["budget"]);
    assert_eq!(
        ids(&doc, doc.query_selector_all(".hs-input")?),
        vec!["budget"]
    );
    assert_eq!(
        ids(&doc, doc.query_selector_all("input")?),
        vec!["budget", "email"]
    );
    assert_eq!(
        ids(&doc, doc.query_selector_all("form.hs-form.stacked")?),
        vec!["signup"]
    );
    assert_eq!(doc.query_selector_all(".missing")?, Vec::<NodeId>::new());
    Ok(())
}

#[test]
fn combinators_follow_tree_structure() -> Result<()> {
    let doc = quiet(FORM)?;

    assert_eq!(ids(&doc, doc.query_selector_all("form input")?).len(), 2);
    assert_eq!(
        ids(&doc, doc.query_selector_all("div > input")?),
        vec!["email"]
    );
    assert_eq!(
        ids(&doc, doc.query_selector_all("form > div.row > input")?),
        vec!["email"]
    );
    assert_eq!(
        ids(&doc, doc.query_selector_all("form fieldset.row > input")?),
        vec!["budget"]
    );
    assert_eq!(doc.query_selector_all("form > input")?.len(), 0);
    Ok(())
}

#[test]
fn descendant_links_backtrack_through_ancestors() -> Result<()> {
    let doc = quiet(
        r#"<div class="a"><div class="b"><div class="a"><p><span id="t"></span></p></div></div></div>"#,
    )?;
    assert_eq!(ids(&doc, doc.query_selector_all(".a > .b .a span")?), vec!["t"]);
    assert_eq!(ids(&doc, doc.query_selector_all(".b > .a > p > span")?), vec!["t"]);
    assert_eq!(doc.query_selector_all(".b > p span")?.len(), 0);
    Ok(())
}

#[test]
fn attribute_tests_match_presence_and_value() -> Result<()> {
    let doc = quiet(FORM)?;

    assert_eq!(ids(&doc, doc.query_selector_all("[required]")?), vec!["email"]);
    assert_eq!(
        ids(&doc, doc.query_selector_all("input[type=email]")?),
        vec!["email"]
    );
    assert_eq!(
        ids(&doc, doc.query_selector_all(r#"[data-kind="money-eur"]"#)?),
        vec!["budget"]
    );
    assert_eq!(
        ids(&doc, doc.query_selector_all("input[name='budget'][class]")?),
        vec!["budget"]
    );
    assert_eq!(doc.query_selector_all("[data-kind=money]")?.len(), 0);
    Ok(())
}

#[test]
fn quoted_values_may_contain_selector_syntax() -> Result<()> {
    let doc = quiet(r#"<input id="odd" name="a > b [c]">"#)?;
    assert_eq!(
        ids(&doc, doc.query_selector_all(r#"input[name="a > b [c]"]"#)?),
        vec!["odd"]
    );
    Ok(())
}

#[test]
fn unsupported_selectors_are_reported() -> Result<()> {
    let doc = quiet(FORM)?;
    for selector in ["", "> input", "input >", "label + input", "#email, #budget", "[name^=bud]"] {
        assert_eq!(
            doc.query_selector(selector),
            Err(Error::UnsupportedSelector(selector.into())),
            "{selector:?} should be rejected"
        );
    }
    Ok(())
}

#[test]
fn element_by_name_uses_document_order() -> Result<()> {
    let doc = quiet(
        r#"<div><section><input name="x" id="deep"></section></div><input name="x" id="later">"#,
    )?;
    let found = doc
        .element_by_name("x")
        .ok_or_else(|| Error::FieldNotFound("x".into()))?;
    assert_eq!(doc.attribute(found, "id").as_deref(), Some("deep"));
    Ok(())
}

#[test]
fn id_lookup_follows_replacement() -> Result<()> {
    let mut doc = quiet(FORM)?;
    let select = doc
        .replace_input_with_select("budget", &options(&[("Low", "low")]))
        .ok_or_else(|| Error::FieldNotFound("budget".into()))?;

    assert_eq!(doc.query_selector("#budget")?, Some(select));
    assert_eq!(doc.query_selector("select#budget.hs-input")?, Some(select));
    assert_eq!(doc.query_selector("input#budget")?, None);
    Ok(())
}

#[test]
fn assertion_failures_carry_a_snippet() -> Result<()> {
    let doc = quiet(FORM)?;

    let err = doc
        .assert_attribute("#budget", "data-kind", "money-usd")
        .err()
        .ok_or_else(|| Error::InvalidArgument("assertion unexpectedly passed".into()))?;
    match err {
        Error::AssertionFailed {
            selector,
            expected,
            actual,
            dom_snippet,
        } => {
            assert_eq!(selector, "#budget");
            assert_eq!(expected, r#"data-kind="money-usd""#);
            assert_eq!(actual, r#"data-kind="money-eur""#);
            assert!(dom_snippet.starts_with("<input id=\"budget\""));
        }
        other => panic!("unexpected error: {other:?}"),
    }

    assert_eq!(
        doc.assert_exists("#nope"),
        Err(Error::SelectorNotFound("#nope".into()))
    );
    Ok(())
}
