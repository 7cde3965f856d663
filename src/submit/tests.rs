// src/submit/tests.rs

#[cfg(test)]
mod payload_tests {
    use bytes::Bytes;

    use crate::files::{FileSelection, SelectedFile, UploadMode};
    use crate::form::models::FormFields;
    use crate::submit::payload::SubmissionPayload;

    fn pdf(name: &str) -> SelectedFile {
        SelectedFile::new(name, "application/pdf", Bytes::from_static(b"%PDF-1.4 test"))
    }

    fn fields() -> FormFields {
        FormFields {
            first_name: "  Alice ".to_string(),
            last_name: "Smith".to_string(),
            email: " alice@example.com ".to_string(),
            phone: "+15551234567".to_string(),
            location: "Berlin".to_string(),
            job_title: "Engineer".to_string(),
            experience: "senior".to_string(),
            skills: "Rust, SQL".to_string(),
            summary: "  Summary text  ".to_string(),
        }
    }

    #[test]
    fn test_text_fields_are_trimmed() {
        let selection = FileSelection::new();
        let payload = SubmissionPayload::assemble(&fields(), &selection);

        assert_eq!(payload.field("firstName"), Some("Alice"));
        assert_eq!(payload.field("email"), Some("alice@example.com"));
        assert_eq!(payload.field("summary"), Some("Summary text"));
        // experience passes through as its code
        assert_eq!(payload.field("experience"), Some("senior"));
    }

    #[test]
    fn test_single_mode_emits_one_resume_part() {
        let mut selection = FileSelection::new();
        selection.admit(vec![pdf("cv.pdf")]);

        let payload = SubmissionPayload::assemble(&fields(), &selection);
        assert_eq!(payload.field("uploadMode"), Some("single"));
        assert_eq!(payload.field("resumeCount"), None);
        assert_eq!(payload.files.len(), 1);
        assert_eq!(payload.files[0].part_name, "resume");
        assert_eq!(payload.files[0].file_name, "cv.pdf");
        assert_eq!(payload.files[0].mime_type, "application/pdf");
    }

    #[test]
    fn test_bulk_mode_emits_indexed_parts_and_count() {
        let mut selection = FileSelection::new();
        selection.set_mode(UploadMode::Bulk);
        selection.admit(vec![pdf("a.pdf"), pdf("b.pdf"), pdf("c.pdf")]);

        let payload = SubmissionPayload::assemble(&fields(), &selection);
        assert_eq!(payload.field("uploadMode"), Some("bulk"));
        assert_eq!(payload.field("resumeCount"), Some("3"));

        let part_names: Vec<&str> = payload
            .files
            .iter()
            .map(|f| f.part_name.as_str())
            .collect();
        assert_eq!(part_names, vec!["resume_0", "resume_1", "resume_2"]);
    }

    #[test]
    fn test_empty_bulk_selection_still_reports_count() {
        let mut selection = FileSelection::new();
        selection.set_mode(UploadMode::Bulk);

        let payload = SubmissionPayload::assemble(&fields(), &selection);
        assert_eq!(payload.field("resumeCount"), Some("0"));
        assert!(payload.files.is_empty());
    }
}

#[cfg(test)]
mod transport_tests {
    use crate::submit::transport::WebhookTransport;

    #[test]
    fn test_transport_keeps_configured_endpoint() {
        let transport = WebhookTransport::new("http://localhost:5678/webhook/job-application")
            .expect("client builds");
        assert_eq!(
            transport.endpoint(),
            "http://localhost:5678/webhook/job-application"
        );
    }
}
