//! Interface-language string tables.
//!
//! These strings label the *tool's* controls (buttons, section headings,
//! placeholders), not the generated document. Selection persists across
//! sessions independently of any invoice draft.

use serde::Serialize;
use ts_rs::TS;

use crate::types::SystemLanguage;

/// Every translatable string of the interface, resolved as one bundle.
#[derive(Debug, Clone, Copy, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct UiStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub invoice_language_and_currency: &'static str,
    pub invoice_language: &'static str,
    pub currency: &'static str,
    pub search_currency: &'static str,
    pub selected: &'static str,
    pub decimal_places: &'static str,
    pub digits_2: &'static str,
    pub digits_3: &'static str,
    pub decimal_note: &'static str,
    pub company_info: &'static str,
    pub company_logo: &'static str,
    pub upload_logo: &'static str,
    pub logo_format: &'static str,
    pub company_name: &'static str,
    pub company_address: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub invoice_details: &'static str,
    pub invoice_number: &'static str,
    pub po_number: &'static str,
    pub tax_options: &'static str,
    pub with_tax: &'static str,
    pub without_tax: &'static str,
    pub tax_rate: &'static str,
    pub invoice_date: &'static str,
    pub due_date: &'static str,
    pub customer_info: &'static str,
    pub bill_to: &'static str,
    pub ship_to: &'static str,
    pub products_services: &'static str,
    pub quantity: &'static str,
    pub description: &'static str,
    pub unit_price: &'static str,
    pub amount: &'static str,
    pub add_item: &'static str,
    pub remove_item: &'static str,
    pub payment_info: &'static str,
    pub payment_placeholder: &'static str,
    pub terms_and_conditions: &'static str,
    pub terms_placeholder: &'static str,
    pub notes: &'static str,
    pub notes_placeholder: &'static str,
    pub subtotal: &'static str,
    pub tax: &'static str,
    pub total: &'static str,
    pub generate_invoice: &'static str,
    pub clear_draft: &'static str,
    pub confirm_clear_draft: &'static str,
}

/// Metadata describing a selectable interface language.
#[derive(Debug, Clone, Copy, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SystemLanguageInfo {
    pub code: SystemLanguage,
    pub name: &'static str,
    pub native_name: &'static str,
    pub flag: &'static str,
}

/// All selectable interface languages.
pub const SYSTEM_LANGUAGES: &[SystemLanguageInfo] = &[
    SystemLanguageInfo { code: SystemLanguage::Tr, name: "Turkish", native_name: "Türkçe", flag: "🇹🇷" },
    SystemLanguageInfo { code: SystemLanguage::En, name: "English", native_name: "English", flag: "🇬🇧" },
    SystemLanguageInfo { code: SystemLanguage::De, name: "German", native_name: "Deutsch", flag: "🇩🇪" },
    SystemLanguageInfo { code: SystemLanguage::Fr, name: "French", native_name: "Français", flag: "🇫🇷" },
    SystemLanguageInfo { code: SystemLanguage::Es, name: "Spanish", native_name: "Español", flag: "🇪🇸" },
];

const TR: UiStrings = UiStrings {
    title: "Fatura Oluşturucu",
    subtitle: "Profesyonel faturalarınızı kolayca oluşturun",
    invoice_language_and_currency: "Fatura Dili ve Para Birimi",
    invoice_language: "Fatura Dili",
    currency: "Para Birimi",
    search_currency: "Para birimi ara...",
    selected: "Seçili",
    decimal_places: "Ondalık Basamak",
    digits_2: "2 Basamak",
    digits_3: "3 Basamak",
    decimal_note: "Tutar, toplam vb. gösterimde kullanılır",
    company_info: "Şirket Bilgileri",
    company_logo: "Şirket Logosu (Opsiyonel)",
    upload_logo: "Logo yüklemek için tıklayın",
    logo_format: "PNG, JPG (maks. 2MB)",
    company_name: "Şirket Adı",
    company_address: "Şirket Adresi",
    email: "E-posta",
    phone: "Telefon",
    invoice_details: "Fatura Detayları",
    invoice_number: "Fatura Numarası",
    po_number: "P.O. Numarası",
    tax_options: "Vergi Seçeneği",
    with_tax: "Vergili",
    without_tax: "Vergisiz",
    tax_rate: "Vergi Oranı (%)",
    invoice_date: "Fatura Tarihi",
    due_date: "Vade Tarihi",
    customer_info: "Müşteri Bilgileri",
    bill_to: "Fatura Adresi",
    ship_to: "Teslimat Adresi",
    products_services: "Ürün / Hizmetler",
    quantity: "Miktar",
    description: "Açıklama",
    unit_price: "Birim Fiyat",
    amount: "Tutar",
    add_item: "Ürün/Hizmet Ekle",
    remove_item: "Öğeyi kaldır",
    payment_info: "Ödeme Bilgileri",
    payment_placeholder: "Banka:\nIBAN:\nHesap Sahibi:",
    terms_and_conditions: "Şartlar ve Koşullar",
    terms_placeholder: "Ödeme vadesi 15 gündür",
    notes: "Notlar",
    notes_placeholder: "Fatura ile ilgili ek notlar...",
    subtotal: "Ara Toplam",
    tax: "Vergi",
    total: "Toplam",
    generate_invoice: "Fatura Oluştur",
    clear_draft: "Taslağı Temizle",
    confirm_clear_draft: "Taslak silinecek. Emin misiniz?",
};

const EN: UiStrings = UiStrings {
    title: "Invoice Generator",
    subtitle: "Create professional invoices easily",
    invoice_language_and_currency: "Invoice Language & Currency",
    invoice_language: "Invoice Language",
    currency: "Currency",
    search_currency: "Search currency...",
    selected: "Selected",
    decimal_places: "Decimal Places",
    digits_2: "2 Digits",
    digits_3: "3 Digits",
    decimal_note: "Used for amount, total display",
    company_info: "Company Information",
    company_logo: "Company Logo (Optional)",
    upload_logo: "Click to upload logo",
    logo_format: "PNG, JPG (max. 2MB)",
    company_name: "Company Name",
    company_address: "Company Address",
    email: "Email",
    phone: "Phone",
    invoice_details: "Invoice Details",
    invoice_number: "Invoice Number",
    po_number: "P.O. Number",
    tax_options: "Tax Option",
    with_tax: "With Tax",
    without_tax: "Without Tax",
    tax_rate: "Tax Rate (%)",
    invoice_date: "Invoice Date",
    due_date: "Due Date",
    customer_info: "Customer Information",
    bill_to: "Bill To",
    ship_to: "Ship To",
    products_services: "Products / Services",
    quantity: "Quantity",
    description: "Description",
    unit_price: "Unit Price",
    amount: "Amount",
    add_item: "Add Product/Service",
    remove_item: "Remove item",
    payment_info: "Payment Information",
    payment_placeholder: "Bank:\nIBAN:\nAccount Holder:",
    terms_and_conditions: "Terms & Conditions",
    terms_placeholder: "Payment is due within 15 days",
    notes: "Notes",
    notes_placeholder: "Additional notes about the invoice...",
    subtotal: "Subtotal",
    tax: "Tax",
    total: "Total",
    generate_invoice: "Generate Invoice",
    clear_draft: "Clear Draft",
    confirm_clear_draft: "Draft will be deleted. Are you sure?",
};

const DE: UiStrings = UiStrings {
    title: "Rechnungsgenerator",
    subtitle: "Erstellen Sie professionelle Rechnungen einfach",
    invoice_language_and_currency: "Rechnungssprache & Währung",
    invoice_language: "Rechnungssprache",
    currency: "Währung",
    search_currency: "Währung suchen...",
    selected: "Ausgewählt",
    decimal_places: "Dezimalstellen",
    digits_2: "2 Stellen",
    digits_3: "3 Stellen",
    decimal_note: "Wird für Beträge und Summen verwendet",
    company_info: "Firmeninformationen",
    company_logo: "Firmenlogo (Optional)",
    upload_logo: "Klicken zum Hochladen",
    logo_format: "PNG, JPG (max. 2MB)",
    company_name: "Firmenname",
    company_address: "Firmenadresse",
    email: "E-Mail",
    phone: "Telefon",
    invoice_details: "Rechnungsdetails",
    invoice_number: "Rechnungsnummer",
    po_number: "Bestellnummer",
    tax_options: "Steueroption",
    with_tax: "Mit MwSt.",
    without_tax: "Ohne MwSt.",
    tax_rate: "Steuersatz (%)",
    invoice_date: "Rechnungsdatum",
    due_date: "Fälligkeitsdatum",
    customer_info: "Kundeninformationen",
    bill_to: "Rechnungsadresse",
    ship_to: "Lieferadresse",
    products_services: "Produkte / Dienstleistungen",
    quantity: "Menge",
    description: "Beschreibung",
    unit_price: "Stückpreis",
    amount: "Betrag",
    add_item: "Produkt/Dienstleistung hinzufügen",
    remove_item: "Artikel entfernen",
    payment_info: "Zahlungsinformationen",
    payment_placeholder: "Bank:\nIBAN:\nKontoinhaber:",
    terms_and_conditions: "Geschäftsbedingungen",
    terms_placeholder: "Zahlbar innerhalb von 15 Tagen",
    notes: "Anmerkungen",
    notes_placeholder: "Zusätzliche Anmerkungen zur Rechnung...",
    subtotal: "Zwischensumme",
    tax: "MwSt.",
    total: "Gesamt",
    generate_invoice: "Rechnung erstellen",
    clear_draft: "Entwurf löschen",
    confirm_clear_draft: "Entwurf wird gelöscht. Sind Sie sicher?",
};

const FR: UiStrings = UiStrings {
    title: "Générateur de Factures",
    subtitle: "Créez facilement des factures professionnelles",
    invoice_language_and_currency: "Langue & Devise de Facture",
    invoice_language: "Langue de Facture",
    currency: "Devise",
    search_currency: "Rechercher devise...",
    selected: "Sélectionné",
    decimal_places: "Décimales",
    digits_2: "2 Chiffres",
    digits_3: "3 Chiffres",
    decimal_note: "Utilisé pour les montants et totaux",
    company_info: "Informations Société",
    company_logo: "Logo Société (Optionnel)",
    upload_logo: "Cliquez pour télécharger",
    logo_format: "PNG, JPG (max. 2Mo)",
    company_name: "Nom de Société",
    company_address: "Adresse Société",
    email: "E-mail",
    phone: "Téléphone",
    invoice_details: "Détails Facture",
    invoice_number: "Numéro de Facture",
    po_number: "Numéro de Commande",
    tax_options: "Option TVA",
    with_tax: "Avec TVA",
    without_tax: "Sans TVA",
    tax_rate: "Taux TVA (%)",
    invoice_date: "Date Facture",
    due_date: "Date d'échéance",
    customer_info: "Informations Client",
    bill_to: "Facturer à",
    ship_to: "Livrer à",
    products_services: "Produits / Services",
    quantity: "Quantité",
    description: "Description",
    unit_price: "Prix Unitaire",
    amount: "Montant",
    add_item: "Ajouter Produit/Service",
    remove_item: "Supprimer",
    payment_info: "Informations de Paiement",
    payment_placeholder: "Banque:\nIBAN:\nTitulaire:",
    terms_and_conditions: "Conditions Générales",
    terms_placeholder: "Paiement sous 15 jours",
    notes: "Notes",
    notes_placeholder: "Notes supplémentaires...",
    subtotal: "Sous-total",
    tax: "TVA",
    total: "Total",
    generate_invoice: "Générer Facture",
    clear_draft: "Effacer Brouillon",
    confirm_clear_draft: "Le brouillon sera supprimé. Êtes-vous sûr?",
};

const ES: UiStrings = UiStrings {
    title: "Generador de Facturas",
    subtitle: "Crea facturas profesionales fácilmente",
    invoice_language_and_currency: "Idioma y Moneda de Factura",
    invoice_language: "Idioma de Factura",
    currency: "Moneda",
    search_currency: "Buscar moneda...",
    selected: "Seleccionado",
    decimal_places: "Decimales",
    digits_2: "2 Dígitos",
    digits_3: "3 Dígitos",
    decimal_note: "Usado para montos y totales",
    company_info: "Información de Empresa",
    company_logo: "Logo de Empresa (Opcional)",
    upload_logo: "Clic para subir",
    logo_format: "PNG, JPG (máx. 2MB)",
    company_name: "Nombre de Empresa",
    company_address: "Dirección de Empresa",
    email: "Correo",
    phone: "Teléfono",
    invoice_details: "Detalles de Factura",
    invoice_number: "Número de Factura",
    po_number: "Número de Pedido",
    tax_options: "Opción de Impuesto",
    with_tax: "Con IVA",
    without_tax: "Sin IVA",
    tax_rate: "Tasa de IVA (%)",
    invoice_date: "Fecha de Factura",
    due_date: "Fecha de Vencimiento",
    customer_info: "Información del Cliente",
    bill_to: "Facturar a",
    ship_to: "Enviar a",
    products_services: "Productos / Servicios",
    quantity: "Cantidad",
    description: "Descripción",
    unit_price: "Precio Unitario",
    amount: "Importe",
    add_item: "Añadir Producto/Servicio",
    remove_item: "Eliminar",
    payment_info: "Información de Pago",
    payment_placeholder: "Banco:\nIBAN:\nTitular:",
    terms_and_conditions: "Términos y Condiciones",
    terms_placeholder: "Pago en 15 días",
    notes: "Notas",
    notes_placeholder: "Notas adicionales...",
    subtotal: "Subtotal",
    tax: "IVA",
    total: "Total",
    generate_invoice: "Generar Factura",
    clear_draft: "Borrar Borrador",
    confirm_clear_draft: "El borrador será eliminado. ¿Está seguro?",
};

/// Resolves the interface string bundle for a system language.
pub const fn ui_strings(language: SystemLanguage) -> &'static UiStrings {
    match language {
        SystemLanguage::Tr => &TR,
        SystemLanguage::En => &EN,
        SystemLanguage::De => &DE,
        SystemLanguage::Fr => &FR,
        SystemLanguage::Es => &ES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_strings_lookup() {
        assert_eq!(ui_strings(SystemLanguage::En).title, "Invoice Generator");
        assert_eq!(ui_strings(SystemLanguage::Tr).generate_invoice, "Fatura Oluştur");
        assert_eq!(
            ui_strings(SystemLanguage::De).confirm_clear_draft,
            "Entwurf wird gelöscht. Sind Sie sicher?"
        );
    }

    #[test]
    fn test_every_system_language_listed() {
        for lang in [
            SystemLanguage::Tr,
            SystemLanguage::En,
            SystemLanguage::De,
            SystemLanguage::Fr,
            SystemLanguage::Es,
        ] {
            assert!(SYSTEM_LANGUAGES.iter().any(|info| info.code == lang));
            assert!(!ui_strings(lang).title.is_empty());
        }
    }
}
