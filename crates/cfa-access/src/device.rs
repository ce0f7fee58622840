use cfa_core::fallback::first_present_or_na;
use cfa_core::{AdminApiPayload, AdminDevicePayload, DeviceRecord, IdentityPayload, ResolvedDeviceInfo};

use crate::error::{ResolveError, ensure_identity_ok};

/// Resolve device identity fields.
///
/// Per field, highest priority first:
/// - `deviceId`: `device_id` argument → admin API → first session device → `"N/A"`
/// - name / model / OS version: admin API → first session device → `"N/A"`
/// - serial: admin `serial_number` → session `serial_number` → session `serial` → `"N/A"`
///
/// # Errors
///
/// Returns `ResolveError::UpstreamIdentity` if the identity payload carries an error.
pub fn resolve_device_info(
    identity: &IdentityPayload,
    device_id: Option<&str>,
    admin: Option<&AdminDevicePayload>,
) -> Result<ResolvedDeviceInfo, ResolveError> {
    ensure_identity_ok(identity)?;

    let api = admin.and_then(AdminApiPayload::result);
    let session = identity.session_device();
    let field = |get: fn(&DeviceRecord) -> Option<&str>| {
        first_present_or_na([api.and_then(get), session.and_then(get)])
    };

    let info = ResolvedDeviceInfo {
        device_id: first_present_or_na([
            device_id,
            api.and_then(DeviceRecord::id),
            session.and_then(DeviceRecord::id),
        ]),
        device_name: field(DeviceRecord::name),
        device_model: field(DeviceRecord::model),
        device_os_version: field(DeviceRecord::os_version),
        device_serial: first_present_or_na([
            api.and_then(DeviceRecord::serial_number),
            session.and_then(DeviceRecord::serial_number),
            session.and_then(DeviceRecord::serial),
        ]),
    };

    tracing::debug!(
        device_id = %info.device_id,
        from_admin = api.is_some(),
        from_session = session.is_some(),
        "resolved device info",
    );
    Ok(info)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    use super::*;

    fn identity(value: Value) -> IdentityPayload {
        serde_json::from_value(value).expect("identity should deserialize")
    }

    fn admin(value: Value) -> AdminDevicePayload {
        serde_json::from_value(value).expect("admin payload should deserialize")
    }

    fn session_with(device: Value) -> IdentityPayload {
        identity(json!({"device_sessions": [{"device": device}]}))
    }

    #[test]
    fn explicit_device_id_wins() {
        let info = resolve_device_info(
            &session_with(json!({"id": "S1"})),
            Some("EXP1"),
            Some(&admin(json!({"result": {"id": "A1"}}))),
        )
        .unwrap();
        assert_eq!(info.device_id, "EXP1");
    }

    #[test]
    fn admin_device_id_beats_session() {
        let info = resolve_device_info(
            &session_with(json!({"id": "S1"})),
            None,
            Some(&admin(json!({"result": {"id": "A1"}}))),
        )
        .unwrap();
        assert_eq!(info.device_id, "A1");
    }

    #[test]
    fn session_device_id_used_without_admin() {
        let info = resolve_device_info(&session_with(json!({"id": "S1"})), None, None).unwrap();
        assert_eq!(info.device_id, "S1");
    }

    #[test]
    fn empty_explicit_id_falls_through() {
        let info = resolve_device_info(&session_with(json!({"id": "S1"})), Some(""), None).unwrap();
        assert_eq!(info.device_id, "S1");
    }

    #[test]
    fn nothing_resolves_to_sentinels() {
        let info = resolve_device_info(&IdentityPayload::default(), None, None).unwrap();
        assert_eq!(
            info,
            ResolvedDeviceInfo {
                device_id: "N/A".into(),
                device_name: "N/A".into(),
                device_model: "N/A".into(),
                device_os_version: "N/A".into(),
                device_serial: "N/A".into(),
            }
        );
    }

    #[test]
    fn fields_merge_independently() {
        let identity = session_with(json!({
            "id": "S1",
            "name": "session-name",
            "model": "session-model",
            "os_version": "13.0"
        }));
        let admin = admin(json!({"result": {"name": "admin-name", "os_version": "14.4"}}));

        let info = resolve_device_info(&identity, None, Some(&admin)).unwrap();
        assert_eq!(info.device_id, "S1");
        assert_eq!(info.device_name, "admin-name");
        assert_eq!(info.device_model, "session-model");
        assert_eq!(info.device_os_version, "14.4");
        assert_eq!(info.device_serial, "N/A");
    }

    #[test]
    fn serial_chain_prefers_admin_serial_number() {
        let identity = session_with(json!({"serial_number": "S-SN", "serial": "S-ALT"}));
        let admin = admin(json!({"result": {"serial_number": "A-SN"}}));
        let info = resolve_device_info(&identity, None, Some(&admin)).unwrap();
        assert_eq!(info.device_serial, "A-SN");
    }

    #[test]
    fn serial_chain_uses_session_serial_number_before_alternate() {
        let identity = session_with(json!({"serial_number": "S-SN", "serial": "S-ALT"}));
        let info = resolve_device_info(&identity, None, None).unwrap();
        assert_eq!(info.device_serial, "S-SN");
    }

    #[test]
    fn serial_chain_falls_back_to_alternate_field() {
        let identity = session_with(json!({"serial": "S-ALT"}));
        let info = resolve_device_info(&identity, None, None).unwrap();
        assert_eq!(info.device_serial, "S-ALT");
    }

    #[test]
    fn admin_envelope_without_result_is_ignored() {
        let info = resolve_device_info(
            &session_with(json!({"name": "session-name"})),
            None,
            Some(&admin(json!({"success": false}))),
        )
        .unwrap();
        assert_eq!(info.device_name, "session-name");
    }

    #[test]
    fn only_first_session_is_read() {
        let identity = identity(json!({
            "device_sessions": [
                {"device": {"name": "first"}},
                {"device": {"name": "second", "model": "second-model"}}
            ]
        }));
        let info = resolve_device_info(&identity, None, None).unwrap();
        assert_eq!(info.device_name, "first");
        assert_eq!(info.device_model, "N/A");
    }

    #[test]
    fn upstream_error_fails_without_partial_result() {
        let identity = identity(json!({
            "error": "identity lookup failed",
            "device_sessions": [{"device": {"id": "S1"}}]
        }));
        let err = resolve_device_info(&identity, Some("EXP1"), None).unwrap_err();
        assert!(matches!(err, ResolveError::UpstreamIdentity(ref m) if m == "identity lookup failed"));
    }
}
