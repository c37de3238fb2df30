#[cfg(test)]
pub mod test {
    use parking_lot::Mutex;

    use crate::store::{MemoryStore, SettingsStore, StoreValue};

    /// A [`MemoryStore`] that records which keys were looked up, in order.
    /// Used to assert the tree's load traversal order.
    #[derive(Default)]
    pub struct RecordingStore {
        inner: MemoryStore,
        reads: Mutex<Vec<String>>,
    }

    impl RecordingStore {
        pub fn reads(&self) -> Vec<String> {
            self.reads.lock().clone()
        }
    }

    impl SettingsStore for RecordingStore {
        fn get(&self, suite: Option<&str>, key: &str) -> Option<StoreValue> {
            self.reads.lock().push(key.to_string());
            self.inner.get(suite, key)
        }

        fn set(&self, suite: Option<&str>, key: &str, value: StoreValue) {
            self.inner.set(suite, key, value);
        }
    }

    mod scenarios {
        use crate::options::{DebugOption, EnumOption, SwitchOption};
        use crate::registry::Registry;
        use crate::store::MemoryStore;

        fn verbose_registry() -> Registry {
            let mut registry = Registry::new();
            registry.register(|root| {
                root.add_option(SwitchOption::local(
                    "Verbose Logging",
                    Some("Log everything the pipeline does"),
                    false,
                    Some("VerboseLogging"),
                ));
            });
            registry
        }

        fn verbose_switch(root: &crate::RootGroup) -> &SwitchOption {
            let DebugOption::Switch(option) =
                root.option_with_title("Verbose Logging").unwrap()
            else {
                panic!("expected a switch");
            };
            option
        }

        #[test]
        fn verbose_logging_survives_a_process_restart() {
            let registry = verbose_registry();
            let store = MemoryStore::new();

            // Empty store: the compile-time default wins.
            let first = registry.build(&store);
            assert!(!verbose_switch(&first).value());

            verbose_switch(&first).set_value(true);
            verbose_switch(&first).save_state(&store);

            // "Restart": a fresh tree over the same store restores the value.
            let second = registry.build(&store);
            assert!(verbose_switch(&second).value());
        }

        #[test]
        fn enum_selection_maps_back_to_its_title() {
            let option = EnumOption::local(
                "Overdraw display",
                None,
                true,
                0,
                Some("Overdraw"),
                &[("Off", 0), ("Low", 1), ("High", 2)],
            );
            option.set_value(2);
            assert_eq!(option.current_title(), Some("High"));
        }

        #[test]
        fn concurrent_toggles_and_reads_stay_well_defined() {
            let option = SwitchOption::local("Hot switch", None, false, None);
            const WRITERS: usize = 4;
            const READERS: usize = 4;
            const ROUNDS: usize = 2000;

            std::thread::scope(|scope| {
                for _ in 0..WRITERS {
                    scope.spawn(|| {
                        for _ in 0..ROUNDS {
                            option.toggle();
                        }
                    });
                }
                for _ in 0..READERS {
                    scope.spawn(|| {
                        for _ in 0..ROUNDS {
                            // A bool read can only ever be one of the two
                            // well-defined states; this asserts no panic or
                            // torn read surfaces through the option API.
                            let _: bool = option.value();
                        }
                    });
                }
            });

            // Even number of total toggles: back to the default.
            assert!(!option.value());
        }
    }
}
