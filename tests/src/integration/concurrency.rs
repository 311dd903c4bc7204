//! # Concurrent Signing Flows
//!
//! Many threads sign on one device; afterwards the records, sorted by
//! counter, must form one unbroken, verifiable chain.

#[cfg(test)]
mod tests {
    use crate::audit::{audit_chain, split_payload};
    use sc_01_device_signing::test_helpers::fast_key_generator;
    use sc_01_device_signing::{
        Algorithm, CreateDeviceRequest, DeviceSigningApi, DeviceSigningService,
        InMemoryDeviceStorage, SignatureRecord,
    };
    use std::sync::Arc;
    use std::thread;

    const THREADS: usize = 8;
    const PER_THREAD: usize = 25;

    fn concurrent_records(
        service: &Arc<DeviceSigningService<InMemoryDeviceStorage>>,
        id: &'static str,
    ) -> Vec<SignatureRecord> {
        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let service = Arc::clone(service);
                thread::spawn(move || {
                    (0..PER_THREAD)
                        .map(|i| service.sign_data(id, &format!("t{t}_{i}")).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut records: Vec<_> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        records.sort_by_key(|r| split_payload(&r.signed_data).unwrap().0);
        records
    }

    #[test]
    fn test_concurrent_ecc_signing_forms_single_chain() {
        let service = Arc::new(DeviceSigningService::new(
            InMemoryDeviceStorage::new(),
            fast_key_generator(),
        ));
        let device = service
            .create_device(CreateDeviceRequest::new("shared", "", "ECC"))
            .unwrap();

        let records = concurrent_records(&service, "shared");

        assert_eq!(records.len(), THREADS * PER_THREAD);
        assert_eq!(
            audit_chain("shared", Algorithm::Ecc, device.public_key_der(), &records),
            Ok(())
        );
        assert_eq!(
            service.get_device("shared").unwrap().signature_counter,
            (THREADS * PER_THREAD) as u64
        );
    }

    #[test]
    fn test_concurrent_signing_on_separate_devices() {
        let service = Arc::new(DeviceSigningService::new(
            InMemoryDeviceStorage::new(),
            fast_key_generator(),
        ));
        let ids: [&'static str; 3] = ["p", "q", "r"];
        let keys: Vec<_> = ids
            .iter()
            .map(|id| {
                service
                    .create_device(CreateDeviceRequest::new(*id, "", "ECC"))
                    .unwrap()
                    .public_key_der()
                    .to_vec()
            })
            .collect();

        let handles: Vec<_> = ids
            .iter()
            .map(|id| {
                let service = Arc::clone(&service);
                let id = *id;
                thread::spawn(move || concurrent_records(&service, id))
            })
            .collect();

        for ((id, key), handle) in ids.iter().zip(&keys).zip(handles) {
            let records = handle.join().unwrap();
            assert_eq!(audit_chain(id, Algorithm::Ecc, key, &records), Ok(()));
        }
    }

    #[test]
    fn test_readers_never_see_torn_state() {
        let service = Arc::new(DeviceSigningService::new(
            InMemoryDeviceStorage::new(),
            fast_key_generator(),
        ));
        service
            .create_device(CreateDeviceRequest::new("r1", "", "ECC"))
            .unwrap();

        let writer = {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                for i in 0..100 {
                    service.sign_data("r1", &i.to_string()).unwrap();
                }
            })
        };

        let mut last_seen = 0;
        while !writer.is_finished() {
            let device = service.get_device("r1").unwrap();
            assert!(device.signature_counter >= last_seen);
            if device.signature_counter == 0 {
                assert_eq!(device.last_signature, "cjE=");
            } else {
                assert_ne!(device.last_signature, "cjE=");
            }
            last_seen = device.signature_counter;
        }
        writer.join().unwrap();
        assert_eq!(service.get_device("r1").unwrap().signature_counter, 100);
    }
}
