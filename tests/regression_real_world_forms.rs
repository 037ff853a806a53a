use select_swap::{Document, SelectOption};

const HUBSPOT_FORM_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Contact &amp; pricing</title>
  <script>window.hsFormsOnReady = window.hsFormsOnReady || [];</script>
</head>
<body>
<form id="hsForm_abc" method="POST" accept-charset="UTF-8" enctype="multipart/form-data"
      novalidate="" action="https://forms.example.com/submissions/v3/public/submit/formsnext/multipart/1/abc"
      class="hs-form-private hsForm_abc hs-form stacked" data-instance-id="abc" data-form-id="abc">
  <fieldset class="form-columns-1">
    <div class="hs_email hs-email hs-fieldtype-text field hs-form-field">
      <label id="label-email-abc" class="" placeholder="Enter your Email" for="email-abc"><span>Email</span><span class="hs-form-required">*</span></label>
      <legend class="hs-field-desc" style="display: none;"></legend>
      <div class="input"><input id="email-abc" name="email" required="" placeholder="" type="email" class="hs-input" inputmode="email" autocomplete="email" value=""></div>
    </div>
  </fieldset>
  <fieldset class="form-columns-1">
    <div class="hs_budget hs-budget hs-fieldtype-text field hs-form-field">
      <label id="label-budget-abc" class="" placeholder="Enter your Budget" for="budget-abc"><span>Budget</span></label>
      <legend class="hs-field-desc" style="display: none;"></legend>
      <div class="input"><input id="budget-abc" name="budget" required="" placeholder="" type="text" class="hs-input" inputmode="text" autocomplete="off" value=""></div>
    </div>
  </fieldset>
  <div class="hs_submit hs-submit"><div class="actions"><input type="submit" class="hs-button primary large" value="Submit"></div></div>
</form>
</body>
</html>"#;

fn budget_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("Less than $10k", "lt-10k"),
        SelectOption::new("$10k - $50k", "10k-50k"),
        SelectOption::new("More than $50k", "gt-50k"),
    ]
}

fn document(html: &str) -> select_swap::Result<Document> {
    let mut doc = Document::from_html(html)?;
    doc.set_diagnostics_stderr(false);
    Ok(doc)
}

#[test]
fn hubspot_text_field_becomes_dropdown() -> select_swap::Result<()> {
    let mut doc = document(HUBSPOT_FORM_HTML)?;
    let select = doc
        .replace_input_with_select("budget", &budget_options())
        .ok_or_else(|| select_swap::Error::FieldNotFound("budget".into()))?;

    assert_eq!(
        doc.outer_html(select)?,
        concat!(
            r#"<select id="budget-abc" name="budget" required="" placeholder="" type="text" class="hs-input" inputmode="text" autocomplete="off" value="">"#,
            r#"<option value="lt-10k">Less than $10k</option>"#,
            r#"<option value="10k-50k">$10k - $50k</option>"#,
            r#"<option value="gt-50k">More than $50k</option>"#,
            "</select>"
        )
    );
    doc.assert_exists(".hs_budget > .input > select#budget-abc.hs-input")?;
    doc.assert_options("#budget-abc", &budget_options())?;
    doc.assert_attribute("#email-abc", "type", "email")?;
    doc.assert_text("title", "Contact & pricing")?;
    assert_eq!(doc.query_selector_all("form select")?.len(), 1);
    assert!(doc.take_diagnostics().is_empty());
    Ok(())
}

#[test]
fn form_not_yet_rendered_logs_and_keeps_markup() -> select_swap::Result<()> {
    let html = r#"<div class="hbspt-form" id="hbspt-form-placeholder"></div>
<script>hbspt.forms.create({ portalId: "1", formId: "abc" });</script>"#;
    let mut doc = document(html)?;
    let before = doc.dump_dom();

    assert_eq!(doc.replace_input_with_select("budget", &budget_options()), None);

    assert_eq!(doc.dump_dom(), before);
    let logs = doc.take_diagnostics();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].message, r#"Input with name "budget" not found"#);
    Ok(())
}

#[test]
fn several_fields_in_one_form_are_swapped_independently() -> select_swap::Result<()> {
    let mut doc = document(HUBSPOT_FORM_HTML)?;

    let budget = doc.replace_input_with_select("budget", &budget_options());
    let email = doc.replace_input_with_select(
        "email",
        &[
            SelectOption::new("sales@example.com", "sales@example.com"),
            SelectOption::new("support@example.com", "support@example.com"),
        ],
    );

    assert!(budget.is_some());
    assert!(email.is_some());
    assert_eq!(doc.query_selector_all("select")?.len(), 2);
    assert_eq!(doc.query_selector_all("input")?.len(), 1);
    doc.assert_attribute("select[name=email]", "autocomplete", "email")?;
    doc.assert_exists("input[type=submit].hs-button")?;
    Ok(())
}

#[test]
fn replaced_field_keeps_its_label_relationship() -> select_swap::Result<()> {
    let mut doc = document(HUBSPOT_FORM_HTML)?;
    doc.replace_input_with_select("budget", &budget_options())
        .ok_or_else(|| select_swap::Error::FieldNotFound("budget".into()))?;

    let label = doc
        .query_selector("label[for=budget-abc]")?
        .ok_or_else(|| select_swap::Error::SelectorNotFound("label".into()))?;
    let target = doc
        .attribute(label, "for")
        .ok_or_else(|| select_swap::Error::SelectorNotFound("label[for]".into()))?;
    let select = doc.query_selector(&format!("#{target}"))?;
    assert_eq!(
        select.and_then(|node| doc.tag_name(node).map(str::to_string)),
        Some("select".to_string())
    );
    Ok(())
}
