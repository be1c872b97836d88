//! Built-in provider signatures and disposable domains.

use super::RecordKind;

/// Version tag of the built-in catalog.
pub(crate) const BUILTIN_VERSION: &str = "builtin-2024.1";

/// Built-in signatures as `(record kind, needle, provider)`, in match order.
pub(crate) const BUILTIN_SIGNATURES: &[(RecordKind, &str, &str)] = &[
    (RecordKind::Mx, "google.com", "Google Workspace"),
    (RecordKind::Mx, "aspmx.l.google.com", "Google Workspace"),
    (RecordKind::Mx, "outlook.com", "Microsoft 365"),
    (RecordKind::Mx, "protection.outlook.com", "Microsoft 365"),
    (
        RecordKind::Mx,
        "mail.protection.outlook.com",
        "Microsoft Exchange Online Protection",
    ),
    (RecordKind::Mx, "amazonses.com", "Amazon SES"),
    (RecordKind::Mx, "sendgrid.net", "SendGrid"),
    (RecordKind::Mx, "zoho.com", "Zoho Mail"),
    (RecordKind::Mx, "yandex.ru", "Yandex.Mail"),
    (RecordKind::Mx, "mx.cloudflare.net", "Cloudflare Email Routing"),
    (RecordKind::Mx, "mailgun.org", "Mailgun"),
    (RecordKind::Spf, "_spf.google.com", "Google Workspace"),
    (RecordKind::Spf, "spf.protection.outlook.com", "Microsoft 365"),
    (RecordKind::Spf, "amazonses.com", "Amazon SES"),
    (RecordKind::Spf, "sendgrid.net", "SendGrid"),
    (RecordKind::Spf, "zoho.com", "Zoho Mail"),
    (RecordKind::Dmarc, "dmarc.google.com", "Google Workspace"),
    (
        RecordKind::Dmarc,
        "dmarc.protection.outlook.com",
        "Microsoft 365",
    ),
    (RecordKind::Dmarc, "amazon.com", "Amazon SES"),
];

/// Known throwaway-address domains.
pub(crate) const BUILTIN_DISPOSABLE: &[&str] = &[
    "10minutemail.com",
    "temp-mail.org",
    "yopmail.com",
    "mailinator.com",
    "guerrillamail.com",
    "dispostable.com",
];
