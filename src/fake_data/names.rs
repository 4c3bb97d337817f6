// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Word lists for generated records.

pub const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Amara", "Bea", "Carlos", "Chen", "Dana", "Elena", "Farid", "Grace", "Hiro",
    "Ines", "Jamal", "Kara", "Liam", "Maya", "Nikolai", "Olu", "Priya", "Quinn", "Rosa", "Sam",
    "Tomas", "Uma", "Victor", "Wen", "Yara", "Zane",
];

pub const LAST_NAMES: &[&str] = &[
    "Abbott", "Baker", "Castillo", "Dubois", "Eriksen", "Fischer", "Garcia", "Haddad", "Ito",
    "Johnson", "Kowalski", "Lopez", "Mensah", "Nakamura", "Okafor", "Patel", "Quigley", "Rossi",
    "Schmidt", "Tanaka", "Usman", "Valdez", "Williams", "Xu", "Young", "Zimmerman",
];

pub const EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "example.net", "mail.test"];

pub const POLICY_NAMES: &[&str] = &[
    "Acceptable Use Policy",
    "Access Control Policy",
    "Data Retention Policy",
    "Data Privacy Policy",
    "Information Security Policy",
    "Password Management Policy",
    "Email Usage Policy",
    "Incident Response Policy",
    "Mobile Device Management Policy",
    "Remote Work Policy",
    "Third-Party Vendor Policy",
    "Cloud Security Policy",
    "Physical Security Policy",
    "Network Security Policy",
    "Disaster Recovery Policy",
    "Risk Assessment Policy",
    "Audit and Logging Policy",
    "Change Management Policy",
    "Encryption Policy",
    "Data Backup Policy",
    "Security Awareness Training Policy",
    "Data Classification Policy",
    "Endpoint Security Policy",
    "Vulnerability Management Policy",
    "Patch Management Policy",
    "Data Loss Prevention Policy",
    "Firewall Configuration Policy",
    "Asset Management Policy",
    "Internet Usage Policy",
    "Intellectual Property Policy",
];

pub const RISK_TITLES: &[&str] = &[
    "Data Breach",
    "Unauthorized Access",
    "Phishing Attack",
    "Malware Infection",
    "Ransomware Incident",
    "Insider Threat",
    "Vendor Non-Compliance",
    "Data Loss",
    "System Downtime",
    "Weak Passwords",
    "Social Engineering Attack",
    "Cloud Misconfiguration",
    "Unpatched Vulnerabilities",
    "Denial of Service (DoS) Attack",
    "Man-in-the-Middle Attack",
    "Compromised Credentials",
    "Insufficient Encryption",
    "Regulatory Non-Compliance",
    "Mobile Device Theft",
    "Shadow IT Risk",
    "Overprivileged Users",
    "Software Supply Chain Attack",
    "Key Management Failure",
    "Insufficient Logging and Monitoring",
    "API Security Breach",
    "SQL Injection",
    "Zero-Day Exploit",
];

pub const INCIDENT_TITLES: &[&str] = &[
    "Phishing Email Reported",
    "Unauthorized Access Attempt",
    "Malware Detected",
    "Ransomware Attack",
    "Data Breach Discovered",
    "System Outage",
    "Suspicious Network Activity",
    "Compromised User Account",
    "Failed Login Attempt Spike",
    "Lost or Stolen Device",
    "Policy Violation Detected",
    "Misconfigured Firewall",
    "Unpatched Software Exploited",
    "Unauthorized USB Device Detected",
    "Failed Backup Recovery",
    "Physical Security Breach",
    "Third-Party Service Outage",
    "Privilege Escalation Attempt",
    "Suspicious Cloud Access",
    "Fraudulent Transaction",
    "SQL Injection Attempt",
    "Unauthorized Configuration Change",
    "Audit Log Tampering",
    "Abnormal Resource Utilization",
];

pub const CONTROL_NAMES: &[&str] = &[
    "Access Control Enforcement",
    "Password Complexity Requirements",
    "Multi-Factor Authentication",
    "Role-Based Access Control",
    "Data Encryption in Transit",
    "Data Encryption at Rest",
    "Network Firewall Configuration",
    "Intrusion Detection System",
    "Endpoint Protection",
    "Patch Management Process",
    "Backup and Recovery Plan",
    "Vulnerability Scanning",
    "Incident Response Plan",
    "Identity and Access Management (IAM)",
    "Network Segmentation",
    "Third-Party Risk Assessment",
    "Secure Remote Access",
    "Audit Log Review",
    "Privileged Account Management",
    "Key Management Procedure",
    "Change Management Process",
    "Business Continuity Plan",
    "Continuous Monitoring Controls",
    "Zero Trust Network Architecture",
];

pub const LOREM_WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat",
];

pub const ACTIVE_STATUSES: &[&str] = &["Active", "Inactive"];
pub const RISK_RATINGS: &[&str] = &["Low", "Medium", "High", "Critical"];
pub const INCIDENT_STATUSES: &[&str] = &["Open", "Closed", "In Progress"];
pub const INCIDENT_PRIORITIES: &[&str] = &["Low", "Medium", "High"];
pub const CONTROL_STATUSES: &[&str] = &["Not Tested", "Passed", "Failed"];
