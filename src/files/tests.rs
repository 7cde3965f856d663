// src/files/tests.rs

#[cfg(test)]
mod admission_tests {
    use bytes::Bytes;

    use crate::files::admission::{is_admissible, resolve_mime_type, screen, MAX_FILE_SIZE};
    use crate::files::models::SelectedFile;

    fn pdf(name: &str) -> SelectedFile {
        SelectedFile::new(name, "application/pdf", Bytes::from_static(b"%PDF-1.4 test"))
    }

    #[test]
    fn test_whitelisted_types_pass() {
        assert!(is_admissible(&pdf("cv.pdf")));
        assert!(is_admissible(&SelectedFile::new(
            "cv.doc",
            "application/msword",
            Bytes::from_static(b"old word"),
        )));
        assert!(is_admissible(&SelectedFile::new(
            "cv.docx",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            Bytes::from_static(b"new word"),
        )));
    }

    #[test]
    fn test_non_whitelisted_type_rejected() {
        let png = SelectedFile::new("cat.png", "image/png", Bytes::from_static(b"not a resume"));
        assert!(!is_admissible(&png));
    }

    #[test]
    fn test_size_limit_is_exact() {
        let at_limit = SelectedFile {
            name: "exact.pdf".to_string(),
            size: MAX_FILE_SIZE,
            mime_type: "application/pdf".to_string(),
            data: Bytes::new(),
        };
        assert!(is_admissible(&at_limit));

        let over = SelectedFile {
            size: MAX_FILE_SIZE + 1,
            ..at_limit
        };
        assert!(!is_admissible(&over));
    }

    #[test]
    fn test_missing_content_type_is_sniffed() {
        // payload carries the PDF magic; the declared type is generic
        let sniffed = SelectedFile::new(
            "cv.pdf",
            "application/octet-stream",
            Bytes::from_static(b"%PDF-1.7\n%fake body"),
        );
        assert_eq!(resolve_mime_type(&sniffed), "application/pdf");
        assert!(is_admissible(&sniffed));

        let unknown = SelectedFile::new("blob", "", Bytes::from_static(b"no magic here"));
        assert_eq!(resolve_mime_type(&unknown), "application/octet-stream");
        assert!(!is_admissible(&unknown));
    }

    #[test]
    fn test_screen_preserves_order_and_counts_rejects() {
        let batch = vec![
            pdf("a.pdf"),
            SelectedFile::new("cat.png", "image/png", Bytes::from_static(b"nope")),
            pdf("b.pdf"),
        ];
        let (admitted, rejected) = screen(batch);
        assert_eq!(rejected, 1);
        let names: Vec<&str> = admitted.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.pdf", "b.pdf"]);
    }
}

#[cfg(test)]
mod selection_tests {
    use bytes::Bytes;

    use crate::files::models::{FileSelection, SelectedFile, UploadMode};

    fn pdf(name: &str) -> SelectedFile {
        SelectedFile::new(name, "application/pdf", Bytes::from_static(b"%PDF-1.4 test"))
    }

    #[test]
    fn test_single_mode_holds_at_most_one() {
        let mut selection = FileSelection::new();
        let outcome = selection.admit(vec![pdf("a.pdf"), pdf("b.pdf")]);
        assert_eq!(outcome.added, 1);
        assert_eq!(selection.files().len(), 1);
        assert_eq!(selection.files()[0].name, "a.pdf");
    }

    #[test]
    fn test_bulk_appends_in_selection_order() {
        let mut selection = FileSelection::new();
        selection.set_mode(UploadMode::Bulk);
        selection.admit(vec![pdf("a.pdf")]);
        let outcome = selection.admit(vec![pdf("b.pdf"), pdf("a.pdf")]);
        assert_eq!(outcome.added, 2);

        // duplicates by name are kept
        let names: Vec<&str> = selection.files().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.pdf", "b.pdf", "a.pdf"]);
    }

    #[test]
    fn test_mode_switch_always_clears() {
        let mut selection = FileSelection::new();
        selection.admit(vec![pdf("a.pdf")]);

        // even switching to the same mode drops the selection
        selection.set_mode(UploadMode::Single);
        assert!(!selection.has_files());
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut selection = FileSelection::new();
        selection.admit(vec![pdf("a.pdf")]);
        assert!(selection.remove(1).is_none());
        assert_eq!(selection.remove(0).unwrap().name, "a.pdf");
        assert!(!selection.has_files());
    }
}

#[cfg(test)]
mod preview_tests {
    use std::sync::Arc;

    use bytes::Bytes;

    use crate::files::models::SelectedFile;
    use crate::files::preview::{
        InMemoryPreviewBackend, PreviewBackend, PreviewKind, PreviewSession,
    };

    #[test]
    fn test_in_memory_backend_registers_and_releases_payload() {
        let backend = Arc::new(InMemoryPreviewBackend::new());
        let file = SelectedFile::new(
            "cv.pdf",
            "application/pdf",
            Bytes::from_static(b"%PDF-1.4 body"),
        );

        let session = PreviewSession::open(backend.clone(), &file);
        assert_eq!(session.kind(), PreviewKind::Pdf);
        assert_eq!(backend.live_handles(), 1);
        assert_eq!(
            backend.payload(session.token()),
            Some(Bytes::from_static(b"%PDF-1.4 body"))
        );

        let token = session.token();
        drop(session);
        assert_eq!(backend.live_handles(), 0);
        assert_eq!(backend.payload(token), None);
    }

    #[test]
    fn test_word_documents_have_no_inline_preview() {
        let backend = Arc::new(InMemoryPreviewBackend::new());
        let file = SelectedFile::new(
            "cv.docx",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            Bytes::from_static(b"PK fake"),
        );
        let session = PreviewSession::open(backend, &file);
        assert_eq!(session.kind(), PreviewKind::Unavailable);
        assert_eq!(session.file_name(), "cv.docx");
    }
}
