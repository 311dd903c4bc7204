//! # Chain Verification Flows
//!
//! Signs through the service API and audits the result with nothing but the
//! device's public key, for both algorithms.

#[cfg(test)]
mod tests {
    use crate::audit::{audit_chain, split_payload, AuditError};
    use sc_01_device_signing::test_helpers::fast_key_generator;
    use sc_01_device_signing::{
        Algorithm, CreateDeviceRequest, DeviceSigningApi, DeviceSigningService,
        InMemoryDeviceStorage, SignatureRecord,
    };

    // =========================================================================
    // FIXTURES
    // =========================================================================

    fn service() -> DeviceSigningService<InMemoryDeviceStorage> {
        DeviceSigningService::new(InMemoryDeviceStorage::new(), fast_key_generator())
    }

    fn sign_many(
        service: &DeviceSigningService<InMemoryDeviceStorage>,
        id: &str,
        data: &[&str],
    ) -> Vec<SignatureRecord> {
        data.iter()
            .map(|d| service.sign_data(id, d).unwrap())
            .collect()
    }

    fn signed_chain(algorithm: &str, id: &str) -> (Vec<u8>, Vec<SignatureRecord>) {
        let service = service();
        let device = service
            .create_device(CreateDeviceRequest::new(id, "chain test", algorithm))
            .unwrap();
        let records = sign_many(&service, id, &["tx1", "tx_2", "", "tx 4", "tx5"]);
        (device.public_key_der().to_vec(), records)
    }

    // =========================================================================
    // HAPPY PATH
    // =========================================================================

    #[test]
    fn test_rsa_chain_passes_audit() {
        let (key, records) = signed_chain("RSA", "rsa-1");
        assert_eq!(audit_chain("rsa-1", Algorithm::Rsa, &key, &records), Ok(()));
    }

    #[test]
    fn test_ecc_chain_passes_audit() {
        let (key, records) = signed_chain("ECC", "ecc-1");
        assert_eq!(audit_chain("ecc-1", Algorithm::Ecc, &key, &records), Ok(()));
    }

    #[test]
    fn test_data_is_recoverable_from_payload() {
        let (_, records) = signed_chain("ECC", "ecc-2");
        let data: Vec<_> = records
            .iter()
            .map(|r| split_payload(&r.signed_data).unwrap().1.to_string())
            .collect();
        assert_eq!(data, vec!["tx1", "tx_2", "", "tx 4", "tx5"]);
    }

    #[test]
    fn test_first_payload_links_to_base64_id() {
        let (_, records) = signed_chain("ECC", "d1");
        assert_eq!(records[0].signed_data, "0_tx1_ZDE=");
    }

    #[test]
    fn test_device_state_tracks_chain_tail() {
        let service = service();
        service
            .create_device(CreateDeviceRequest::new("d1", "", "ECC"))
            .unwrap();
        let records = sign_many(&service, "d1", &["a", "b", "c"]);

        let device = service.get_device("d1").unwrap();
        assert_eq!(device.signature_counter, 3);
        assert_eq!(device.last_signature, records[2].signature);
    }

    #[test]
    fn test_devices_have_independent_chains() {
        let service = service();
        for id in ["a", "b"] {
            service
                .create_device(CreateDeviceRequest::new(id, "", "ECC"))
                .unwrap();
        }
        sign_many(&service, "a", &["1", "2", "3"]);
        let b = service.sign_data("b", "1").unwrap();

        assert_eq!(b.signed_data, "0_1_Yg==");
        assert_eq!(service.get_device("a").unwrap().signature_counter, 3);
        assert_eq!(service.get_device("b").unwrap().signature_counter, 1);
    }

    // =========================================================================
    // TAMPER DETECTION
    // =========================================================================

    #[test]
    fn test_audit_detects_dropped_record() {
        let (key, mut records) = signed_chain("ECC", "ecc-3");
        records.remove(2);
        assert_eq!(
            audit_chain("ecc-3", Algorithm::Ecc, &key, &records),
            Err(AuditError::CounterMismatch { index: 2, found: 3 })
        );
    }

    #[test]
    fn test_audit_detects_reordering() {
        let (key, mut records) = signed_chain("ECC", "ecc-4");
        records.swap(0, 1);
        assert_eq!(
            audit_chain("ecc-4", Algorithm::Ecc, &key, &records),
            Err(AuditError::CounterMismatch { index: 0, found: 1 })
        );
    }

    #[test]
    fn test_audit_detects_rewritten_data() {
        let (key, mut records) = signed_chain("RSA", "rsa-2");
        records[1].signed_data = records[1].signed_data.replacen("tx_2", "tx_9", 1);
        assert_eq!(
            audit_chain("rsa-2", Algorithm::Rsa, &key, &records),
            Err(AuditError::BadSignature { index: 1 })
        );
    }

    #[test]
    fn test_audit_detects_foreign_key() {
        let (_, records) = signed_chain("ECC", "ecc-5");
        let (other_key, _) = signed_chain("ECC", "ecc-6");
        assert_eq!(
            audit_chain("ecc-5", Algorithm::Ecc, &other_key, &records),
            Err(AuditError::BadSignature { index: 0 })
        );
    }

    #[test]
    fn test_audit_detects_wrong_genesis() {
        let (key, records) = signed_chain("ECC", "ecc-7");
        assert_eq!(
            audit_chain("someone-else", Algorithm::Ecc, &key, &records),
            Err(AuditError::BrokenLink { index: 0 })
        );
    }
}
