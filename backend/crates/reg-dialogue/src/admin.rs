//! Admin-only list and export.

use crate::texts;
use crate::{Document, Keyboard, Reply, ReplyKind};

use reg_config::{AdminConfig, DialogueConfig};
use reg_ledger::Ledger;

use log::{error, info, warn};

pub(crate) async fn recent_list(
    ledger: &Ledger,
    admin: &AdminConfig,
    settings: &DialogueConfig,
    identity: &str,
) -> Reply {
    if !admin.is_admin(identity) {
        warn!("Identity {identity} requested the registration list without admin rights");
        return Reply::new(ReplyKind::Unauthorized, texts::UNAUTHORIZED);
    }

    match ledger.list_recent(settings.list_limit).await {
        Ok(rows) if rows.is_empty() => Reply::new(ReplyKind::AdminList, texts::LIST_EMPTY),
        Ok(rows) => Reply::new(ReplyKind::AdminList, texts::recent_list(&rows))
            .markdown()
            .with_keyboard(Keyboard::RegisteredAdmin),
        Err(e) => {
            error!("Failed to list registrations for {identity}: {e}");
            Reply::failure()
        }
    }
}

pub(crate) async fn export(
    ledger: &Ledger,
    admin: &AdminConfig,
    settings: &DialogueConfig,
    identity: &str,
) -> Reply {
    if !admin.is_admin(identity) {
        warn!("Identity {identity} requested the export without admin rights");
        return Reply::new(ReplyKind::Unauthorized, texts::UNAUTHORIZED);
    }

    match ledger.export().await {
        Ok(bytes) => {
            info!("Exporting {} bytes of registrations to {identity}", bytes.len());
            Reply::new(ReplyKind::AdminExport, texts::EXPORT_CAPTION).with_document(Document {
                file_name: settings.export_file_name.clone(),
                caption: texts::EXPORT_CAPTION.to_string(),
                bytes,
            })
        }
        Err(e) => {
            error!("Export failed for {identity}: {e}");
            Reply::new(ReplyKind::Failure, texts::EXPORT_FAILED)
        }
    }
}
