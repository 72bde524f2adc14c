#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use tempfile::TempDir;

    use crate::models::report::{ RunReport, MISSING_STACKTRACE, REPORT_FILE_NAME };

    fn no_properties() -> BTreeMap<String, String> {
        BTreeMap::new()
    }

    #[test]
    fn failure_count_is_derived_and_stable() {
        let mut report = RunReport::new("suite");
        report.add_case("a.json", 100, no_properties());
        report.add_case_with_failure("b.json", 200, no_properties(), "boom");
        report.add_case("c.json", 300, no_properties());

        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.cases().len(), 3);
    }

    #[test]
    fn xml_carries_suite_attributes() {
        let mut report = RunReport::new("api-tests");
        report.add_case("a.json", 500, no_properties());
        report.add_case_with_failure("b.xml", 1000, no_properties(), "boom");

        let xml = report.to_xml();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<testsuite name=\"api-tests\" tests=\"2\" failures=\"1\""));
        assert!(xml.contains("time=\"1.500\""));
        assert!(xml.contains("</testsuite>"));
    }

    #[test]
    fn case_order_matches_insertion_order() {
        let mut report = RunReport::new("suite");
        report.add_case("first.json", 1, no_properties());
        report.add_case("second.json", 2, no_properties());
        report.add_case("third.json", 3, no_properties());

        let xml = report.to_xml();
        let first = xml.find("first.json").unwrap();
        let second = xml.find("second.json").unwrap();
        let third = xml.find("third.json").unwrap();

        assert!(first < second);
        assert!(second < third);
    }

    #[test]
    fn failed_case_carries_failure_element_with_placeholder() {
        let mut report = RunReport::new("suite");
        report.add_case_with_failure("b.xml", 250, no_properties(), "Suite / Case / Step: boom");

        let xml = report.to_xml();

        assert!(xml.contains("<testcase name=\"b.xml\" time=\"0.250\">"));
        assert!(xml.contains("<failure message=\"Suite / Case / Step: boom\">"));
        assert!(xml.contains("&lt;missing stacktrace&gt;"));
        assert!(!xml.contains(MISSING_STACKTRACE));
    }

    #[test]
    fn names_and_messages_are_escaped() {
        let mut report = RunReport::new("suite \"quoted\" & <odd>");
        report.add_case_with_failure("case<1>.json", 10, no_properties(), "a < b & c > d");

        let xml = report.to_xml();

        assert!(xml.contains("suite &quot;quoted&quot; &amp; &lt;odd&gt;"));
        assert!(xml.contains("case&lt;1&gt;.json"));
        assert!(xml.contains("a &lt; b &amp; c &gt; d"));
    }

    #[test]
    fn case_properties_are_emitted() {
        let mut properties = BTreeMap::new();
        properties.insert("host".to_string(), "staging.example.com".to_string());

        let mut report = RunReport::new("suite");
        report.add_case("a.json", 10, properties);

        let xml = report.to_xml();

        assert!(xml.contains("<property name=\"host\" value=\"staging.example.com\"/>"));
    }

    #[test]
    fn save_creates_missing_report_directory() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("nested").join("reports");

        let mut report = RunReport::new("suite");
        report.add_case("a.json", 10, no_properties());

        let path = report.save(&target).unwrap();

        assert_eq!(path, target.join(REPORT_FILE_NAME));
        assert!(path.is_file());

        // Saving again into the existing directory is not an error.
        report.save(&target).unwrap();
    }
}
