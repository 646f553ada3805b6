#[cfg(test)]
mod tests {
    use agenda::libs::appointment::{Appointment, AppointmentList};
    use agenda::libs::calendar::DateTime;
    use agenda::libs::ics::{self, parse_calendar, render_calendar};

    fn single(appointment: Appointment) -> AppointmentList {
        let mut list = AppointmentList::new();
        list.add(appointment);
        list
    }

    #[test]
    fn test_export_structure() {
        let list = single(Appointment::new(DateTime::new(2025, 3, 1, 9, 0), 90, "Team standup"));
        let content = render_calendar(&list);

        assert!(content.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(content.ends_with("END:VCALENDAR\r\n"));
        assert!(content.contains("VERSION:2.0\r\n"));
        assert!(content.contains("CALSCALE:GREGORIAN\r\n"));
        assert!(content.contains("PRODID:"));
        assert!(content.contains("BEGIN:VEVENT\r\n"));
        assert!(content.contains("DTSTART:20250301T090000\r\n"));
        assert!(content.contains("DTEND:20250301T103000\r\n"));
        assert!(content.contains("SUMMARY:Team standup\r\n"));
        assert!(content.contains("DESCRIPTION:Duration: 90 minutes\r\n"));
        assert!(content.contains("END:VEVENT\r\n"));
    }

    #[test]
    fn test_uid_is_stamp_plus_slug() {
        let list = single(Appointment::new(DateTime::new(2025, 3, 1, 9, 0), 90, "Team standup: room #4"));
        let content = render_calendar(&list);

        // Non-alphanumeric separators collapse to single hyphens
        assert!(content.contains("UID:20250301T090000-team-standup-room-4\r\n"));
    }

    #[test]
    fn test_same_day_round_trip_is_exact() {
        let list = single(Appointment::new(DateTime::new(2025, 3, 1, 9, 0), 90, "Review"));
        let imported = parse_calendar(&render_calendar(&list));

        assert_eq!(imported.len(), 1);
        assert_eq!(imported[0].start, DateTime::new(2025, 3, 1, 9, 0));
        assert_eq!(imported[0].duration_minutes, 90);
        assert_eq!(imported[0].description, "Review");
    }

    #[test]
    fn test_multi_day_round_trip_is_lossy() {
        // 3 days: DTEND lands on a later date at the same time of day,
        // so the same-day recompute yields zero and falls back to 60
        let list = single(Appointment::new(DateTime::new(2025, 1, 30, 9, 0), 4320, "Offsite"));
        let imported = parse_calendar(&render_calendar(&list));

        assert_eq!(imported.len(), 1);
        assert_eq!(imported[0].duration_minutes, 60);
        assert_ne!(imported[0].duration_minutes, 4320);
    }

    #[test]
    fn test_zero_duration_reimports_with_default() {
        let list = single(Appointment::new(DateTime::new(2025, 3, 1, 12, 0), 0, "Reminder"));
        let imported = parse_calendar(&render_calendar(&list));

        assert_eq!(imported.len(), 1);
        assert_eq!(imported[0].duration_minutes, 60);
    }

    #[test]
    fn test_import_skips_malformed_blocks() {
        let content = "BEGIN:VCALENDAR\r\n\
                       VERSION:2.0\r\n\
                       BEGIN:VEVENT\r\n\
                       SUMMARY:No start stamp\r\n\
                       END:VEVENT\r\n\
                       some stray line\r\n\
                       BEGIN:VEVENT\r\n\
                       DTSTART:garbage\r\n\
                       DTEND:20250301T100000\r\n\
                       SUMMARY:Broken stamp\r\n\
                       END:VEVENT\r\n\
                       BEGIN:VEVENT\r\n\
                       DTSTART:20250301T090000\r\n\
                       DTEND:20250301T103000\r\n\
                       SUMMARY:Valid\r\n\
                       END:VEVENT\r\n\
                       END:VCALENDAR\r\n";

        let imported = parse_calendar(content);
        assert_eq!(imported.len(), 1);
        assert_eq!(imported[0].description, "Valid");
        assert_eq!(imported[0].duration_minutes, 90);
    }

    #[test]
    fn test_import_without_dtend_defaults_duration() {
        let content = "BEGIN:VCALENDAR\r\n\
                       BEGIN:VEVENT\r\n\
                       DTSTART:20250301T090000\r\n\
                       SUMMARY:Open ended\r\n\
                       END:VEVENT\r\n\
                       END:VCALENDAR\r\n";

        let imported = parse_calendar(content);
        assert_eq!(imported.len(), 1);
        assert_eq!(imported[0].duration_minutes, 60);
    }

    #[test]
    fn test_import_accepts_lf_line_endings() {
        let content = "BEGIN:VCALENDAR\nBEGIN:VEVENT\nDTSTART:20250301T090000\nDTEND:20250301T093000\nSUMMARY:Unix file\nEND:VEVENT\nEND:VCALENDAR\n";

        let imported = parse_calendar(content);
        assert_eq!(imported.len(), 1);
        assert_eq!(imported[0].duration_minutes, 30);
    }

    #[test]
    fn test_empty_calendar() {
        let imported = parse_calendar(&render_calendar(&AppointmentList::new()));
        assert!(imported.is_empty());
    }

    #[test]
    fn test_file_round_trip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("appointments.ics");

        let list = single(Appointment::new(DateTime::new(2025, 6, 15, 10, 30), 45, "Dentist"));
        ics::export_appointments(&list, &path).unwrap();
        let imported = ics::import_appointments(&path).unwrap();

        assert_eq!(imported.len(), 1);
        assert_eq!(imported[0], list.items()[0]);
    }
}
