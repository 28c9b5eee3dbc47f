//! Builds the individual command fragments of the sync pipeline.
//!
//! Every interpolated value that is not a fixed tool name or flag goes
//! through the [`Escaper`]; these functions are total over well-formed
//! [`ConnectionInfo`] and never fail at runtime.

use crate::environment::ConnectionInfo;
use crate::query::build_query;
use crate::shell::Escaper;

/// SSH options baked into every inline source alias. The managed platform
/// exposes its app servers on port 2222, IPv4 only.
const INLINE_ALIAS_SSH_OPTIONS: &str = "-p 2222 -o \"AddressFamily inet\"";

/// Connection flags shared by the dump and import tools:
/// `--database= --user= --password= --host= --port=`, values escaped
/// individually, space-joined, in exactly this order.
pub fn db_flags(info: &ConnectionInfo, escaper: &Escaper) -> String {
    [
        format!("--database={}", escaper.escape(&info.mysql_database)),
        format!("--user={}", escaper.escape(&info.mysql_username)),
        format!("--password={}", escaper.escape(&info.mysql_password)),
        format!("--host={}", escaper.escape(&info.mysql_host)),
        format!("--port={}", escaper.escape(&info.mysql_port)),
    ]
    .join(" ")
}

/// The mysqldump invocation for the source database.
///
/// The fixed flag set makes the stream safe to gzip immediately and reliable
/// to replay row by row: no extended-insert syntax, single-transaction
/// consistency, drop-table statements ahead of each table.
pub fn export_command(info: &ConnectionInfo, escaper: &Escaper) -> String {
    // mysqldump takes the database name positionally, not as --database=.
    let parameters = db_flags(info, escaper).replace("--database=", "");

    format!(
        "mysqldump {} --compress --disable-keys --quick --quote-names \
         --add-drop-table --add-locks --create-options --no-autocommit \
         --single-transaction --skip-extended-insert --complete-insert \
         --order-by-primary",
        parameters
    )
}

/// A throwaway alias definition in URL form, understood by drush without a
/// file on disk: `user@host/?ssh-options=...&db-url=...`.
pub fn inline_alias_url(info: &ConnectionInfo) -> String {
    let query = build_query(&[
        ("ssh-options", INLINE_ALIAS_SSH_OPTIONS),
        ("db-url", &info.mysql_url),
    ]);

    format!("{}@{}/?{}", info.sftp_username, info.sftp_host, query)
}

/// The interactive import invocation for the destination alias, with
/// compressed client transport.
pub fn import_command(dest_alias: &str, escaper: &Escaper) -> String {
    format!("drush {} sql-cli --extra=--compress", escaper.escape(dest_alias))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::Platform;

    fn escaper() -> Escaper {
        Escaper::new(Platform::Posix)
    }

    fn info() -> ConnectionInfo {
        ConnectionInfo {
            mysql_database: "db1".to_string(),
            mysql_username: "u".to_string(),
            mysql_password: "p".to_string(),
            mysql_host: "h".to_string(),
            mysql_port: "3306".to_string(),
            sftp_username: "dev.abc".to_string(),
            sftp_host: "appserver.dev.abc.drush.in".to_string(),
            mysql_url: "mysql://u:p@h:3306/db1".to_string(),
        }
    }

    #[test]
    fn db_flags_emits_fixed_order() {
        assert_eq!(
            db_flags(&info(), &escaper()),
            "--database=db1 --user=u --password=p --host=h --port=3306"
        );
    }

    #[test]
    fn db_flags_quotes_unsafe_password() {
        let mut info = info();
        info.mysql_password = "p@ss word".to_string();
        assert!(db_flags(&info, &escaper()).contains("--password='p@ss word'"));
    }

    #[test]
    fn export_command_strips_database_flag() {
        let command = export_command(&info(), &escaper());
        assert!(!command.contains("--database="));
        assert!(command.starts_with("mysqldump db1 --user=u"));
    }

    #[test]
    fn export_command_carries_streaming_flags() {
        let command = export_command(&info(), &escaper());
        for flag in [
            "--single-transaction",
            "--skip-extended-insert",
            "--complete-insert",
            "--order-by-primary",
            "--add-drop-table",
        ] {
            assert!(command.contains(flag), "missing {}", flag);
        }
    }

    #[test]
    fn inline_alias_url_encodes_query() {
        let url = inline_alias_url(&info());
        assert!(url.starts_with("dev.abc@appserver.dev.abc.drush.in/?"));
        assert!(url.contains("ssh-options=-p+2222+-o+%22AddressFamily+inet%22"));
        assert!(url.contains("db-url=mysql%3A%2F%2Fu%3Ap%40h%3A3306%2Fdb1"));
    }

    #[test]
    fn import_command_uses_compressed_transport() {
        assert_eq!(
            import_command("@live", &escaper()),
            "drush '@live' sql-cli --extra=--compress"
        );
    }
}
