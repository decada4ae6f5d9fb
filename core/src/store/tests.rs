mod common {
    use crate::store::IconStore;
    use crate::types::{Config, IconName, IconRecord};
    use tempfile::TempDir;

    pub(super) fn create_test_store(version: &str) -> (IconStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::new(temp_dir.path().to_path_buf(), "http://unused.invalid");
        let store = IconStore::open(&config, version).unwrap();
        (store, temp_dir)
    }

    pub(super) fn make_name(s: &str) -> IconName {
        IconName::try_from(s).unwrap()
    }

    pub(super) fn make_record(path: &str) -> IconRecord {
        IconRecord::from_path(path)
    }
}

mod round_trip {
    use super::common::{create_test_store, make_name, make_record};

    #[test]
    fn test_put_and_get_batch() {
        let (store, _temp) = create_test_store("7.4.47");

        store
            .put_batch(&[
                (make_name("thermostat"), make_record("M1 2 L3 4")),
                (make_name("sofa"), make_record("M5 6 L7 8")),
            ])
            .unwrap();

        let records = store
            .get_batch(&[
                make_name("sofa"),
                make_name("thermostat"),
                make_name("missing"),
            ])
            .unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].as_ref().unwrap().path, "M5 6 L7 8");
        assert_eq!(records[1].as_ref().unwrap().path, "M1 2 L3 4");
        assert!(records[2].is_none());
    }

    #[test]
    fn test_get_batch_empty_names() {
        let (store, _temp) = create_test_store("7.4.47");

        let records = store.get_batch(&[]).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_put_batch_overwrites() {
        let (store, _temp) = create_test_store("7.4.47");
        let name = make_name("thermostat");

        store
            .put_batch(&[(name.clone(), make_record("old"))])
            .unwrap();
        store
            .put_batch(&[(name.clone(), make_record("new"))])
            .unwrap();

        let records = store.get_batch(&[name]).unwrap();
        assert_eq!(records[0].as_ref().unwrap().path, "new");
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_record_fields_survive() {
        let (store, _temp) = create_test_store("7.4.47");
        let name = make_name("battery-half");

        let mut record = make_record("M0 0");
        record.secondary_path = Some("M1 1".to_string());
        record.view_box = Some("0 0 48 48".to_string());

        store.put_batch(&[(name.clone(), record)]).unwrap();

        let fetched = store.get_batch(&[name]).unwrap().remove(0).unwrap();
        assert_eq!(fetched.path, "M0 0");
        assert_eq!(fetched.secondary_path.as_deref(), Some("M1 1"));
        assert_eq!(fetched.view_box.as_deref(), Some("0 0 48 48"));
    }

    #[test]
    fn test_clear_removes_all_records() {
        let (store, _temp) = create_test_store("7.4.47");

        store
            .put_batch(&[
                (make_name("a"), make_record("p")),
                (make_name("b"), make_record("q")),
            ])
            .unwrap();
        assert_eq!(store.count().unwrap(), 2);

        store.clear().unwrap();

        assert_eq!(store.count().unwrap(), 0);
        assert_eq!(store.pack_version().unwrap().as_deref(), Some("7.4.47"));
    }
}

mod version_gate {
    use super::common::{make_name, make_record};
    use crate::store::IconStore;
    use crate::types::Config;
    use tempfile::TempDir;

    #[test]
    fn test_fresh_store_writes_marker() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::new(temp_dir.path().to_path_buf(), "http://unused.invalid");

        let store = IconStore::open(&config, "7.4.47").unwrap();
        assert_eq!(store.pack_version().unwrap().as_deref(), Some("7.4.47"));
    }

    #[test]
    fn test_same_version_keeps_records() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::new(temp_dir.path().to_path_buf(), "http://unused.invalid");

        {
            let store = IconStore::open(&config, "7.4.47").unwrap();
            store
                .put_batch(&[(make_name("thermostat"), make_record("M1 2"))])
                .unwrap();
        }

        let store = IconStore::open(&config, "7.4.47").unwrap();
        assert_eq!(store.count().unwrap(), 1);
        let records = store.get_batch(&[make_name("thermostat")]).unwrap();
        assert_eq!(records[0].as_ref().unwrap().path, "M1 2");
    }

    #[test]
    fn test_version_bump_clears_records() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::new(temp_dir.path().to_path_buf(), "http://unused.invalid");

        {
            let store = IconStore::open(&config, "7.4.47").unwrap();
            store
                .put_batch(&[(make_name("thermostat"), make_record("M1 2"))])
                .unwrap();
        }

        let store = IconStore::open(&config, "7.4.48").unwrap();
        assert_eq!(store.count().unwrap(), 0);
        assert_eq!(store.pack_version().unwrap().as_deref(), Some("7.4.48"));
    }
}
