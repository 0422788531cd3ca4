//! Document field-label sets, one per document language.
//!
//! These are the labels printed *inside* the generated invoice ("Bill To",
//! "Subtotal", ...), resolved from the snapshot's document language and
//! independent of the tool's interface language.

use serde::Serialize;
use ts_rs::TS;

use crate::types::DocumentLanguage;

/// Localized labels for every printed field of the document.
#[derive(Debug, Clone, Copy, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DocumentLabels {
    pub invoice: &'static str,
    pub invoice_number: &'static str,
    pub invoice_date: &'static str,
    pub due_date: &'static str,
    pub po_number: &'static str,
    pub bill_to: &'static str,
    pub ship_to: &'static str,
    pub quantity: &'static str,
    pub description: &'static str,
    pub unit_price: &'static str,
    pub amount: &'static str,
    pub subtotal: &'static str,
    pub tax: &'static str,
    pub total: &'static str,
    pub terms_and_conditions: &'static str,
    pub notes: &'static str,
    pub payment_details: &'static str,
}

/// Metadata describing a selectable document language.
#[derive(Debug, Clone, Copy, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LanguageInfo {
    pub code: DocumentLanguage,
    pub name: &'static str,
    pub native_name: &'static str,
}

/// All selectable document languages.
pub const LANGUAGES: &[LanguageInfo] = &[
    LanguageInfo { code: DocumentLanguage::Tr, name: "Turkish", native_name: "Türkçe" },
    LanguageInfo { code: DocumentLanguage::En, name: "English", native_name: "English" },
    LanguageInfo { code: DocumentLanguage::De, name: "German", native_name: "Deutsch" },
    LanguageInfo { code: DocumentLanguage::Fr, name: "French", native_name: "Français" },
    LanguageInfo { code: DocumentLanguage::Es, name: "Spanish", native_name: "Español" },
    LanguageInfo { code: DocumentLanguage::It, name: "Italian", native_name: "Italiano" },
    LanguageInfo { code: DocumentLanguage::Pt, name: "Portuguese", native_name: "Português" },
    LanguageInfo { code: DocumentLanguage::Nl, name: "Dutch", native_name: "Nederlands" },
    LanguageInfo { code: DocumentLanguage::Ru, name: "Russian", native_name: "Русский" },
    LanguageInfo { code: DocumentLanguage::Ar, name: "Arabic", native_name: "العربية" },
    LanguageInfo { code: DocumentLanguage::Zh, name: "Chinese", native_name: "中文" },
    LanguageInfo { code: DocumentLanguage::Ja, name: "Japanese", native_name: "日本語" },
    LanguageInfo { code: DocumentLanguage::Ko, name: "Korean", native_name: "한국어" },
];

const TR: DocumentLabels = DocumentLabels {
    invoice: "FATURA",
    invoice_number: "Fatura No",
    invoice_date: "Fatura Tarihi",
    due_date: "Vade Tarihi",
    po_number: "P.O. No",
    bill_to: "Fatura Adresi",
    ship_to: "Teslimat Adresi",
    quantity: "MİKTAR",
    description: "AÇIKLAMA",
    unit_price: "BİRİM FİYAT",
    amount: "TUTAR",
    subtotal: "Ara Toplam",
    tax: "Vergi",
    total: "TOPLAM",
    terms_and_conditions: "Şartlar ve Koşullar",
    notes: "Notlar",
    payment_details: "Ödeme Bilgileri",
};

const EN: DocumentLabels = DocumentLabels {
    invoice: "INVOICE",
    invoice_number: "Invoice #",
    invoice_date: "Invoice Date",
    due_date: "Due Date",
    po_number: "P.O. #",
    bill_to: "Bill To",
    ship_to: "Ship To",
    quantity: "QTY",
    description: "DESCRIPTION",
    unit_price: "UNIT PRICE",
    amount: "AMOUNT",
    subtotal: "Subtotal",
    tax: "Tax",
    total: "TOTAL",
    terms_and_conditions: "Terms & Conditions",
    notes: "Notes",
    payment_details: "Payment Details",
};

const DE: DocumentLabels = DocumentLabels {
    invoice: "RECHNUNG",
    invoice_number: "Rechnungsnr.",
    invoice_date: "Rechnungsdatum",
    due_date: "Fälligkeitsdatum",
    po_number: "Bestellnr.",
    bill_to: "Rechnungsadresse",
    ship_to: "Lieferadresse",
    quantity: "MENGE",
    description: "BESCHREIBUNG",
    unit_price: "STÜCKPREIS",
    amount: "BETRAG",
    subtotal: "Zwischensumme",
    tax: "MwSt.",
    total: "GESAMT",
    terms_and_conditions: "Geschäftsbedingungen",
    notes: "Anmerkungen",
    payment_details: "Zahlungsinformationen",
};

const FR: DocumentLabels = DocumentLabels {
    invoice: "FACTURE",
    invoice_number: "N° Facture",
    invoice_date: "Date Facture",
    due_date: "Date d'échéance",
    po_number: "N° Commande",
    bill_to: "Facturer à",
    ship_to: "Livrer à",
    quantity: "QTÉ",
    description: "DESCRIPTION",
    unit_price: "PRIX UNIT.",
    amount: "MONTANT",
    subtotal: "Sous-total",
    tax: "TVA",
    total: "TOTAL",
    terms_and_conditions: "Conditions Générales",
    notes: "Notes",
    payment_details: "Informations de Paiement",
};

const ES: DocumentLabels = DocumentLabels {
    invoice: "FACTURA",
    invoice_number: "N° Factura",
    invoice_date: "Fecha Factura",
    due_date: "Fecha Vencimiento",
    po_number: "N° Pedido",
    bill_to: "Facturar a",
    ship_to: "Enviar a",
    quantity: "CANT.",
    description: "DESCRIPCIÓN",
    unit_price: "PRECIO UNIT.",
    amount: "IMPORTE",
    subtotal: "Subtotal",
    tax: "IVA",
    total: "TOTAL",
    terms_and_conditions: "Términos y Condiciones",
    notes: "Notas",
    payment_details: "Datos de Pago",
};

const IT: DocumentLabels = DocumentLabels {
    invoice: "FATTURA",
    invoice_number: "N° Fattura",
    invoice_date: "Data Fattura",
    due_date: "Data Scadenza",
    po_number: "N° Ordine",
    bill_to: "Fatturare a",
    ship_to: "Spedire a",
    quantity: "QTÀ",
    description: "DESCRIZIONE",
    unit_price: "PREZZO UNIT.",
    amount: "IMPORTO",
    subtotal: "Subtotale",
    tax: "IVA",
    total: "TOTALE",
    terms_and_conditions: "Termini e Condizioni",
    notes: "Note",
    payment_details: "Dettagli Pagamento",
};

const PT: DocumentLabels = DocumentLabels {
    invoice: "FATURA",
    invoice_number: "N° Fatura",
    invoice_date: "Data Fatura",
    due_date: "Data Vencimento",
    po_number: "N° Pedido",
    bill_to: "Faturar para",
    ship_to: "Enviar para",
    quantity: "QTD",
    description: "DESCRIÇÃO",
    unit_price: "PREÇO UNIT.",
    amount: "VALOR",
    subtotal: "Subtotal",
    tax: "IVA",
    total: "TOTAL",
    terms_and_conditions: "Termos e Condições",
    notes: "Notas",
    payment_details: "Dados de Pagamento",
};

const NL: DocumentLabels = DocumentLabels {
    invoice: "FACTUUR",
    invoice_number: "Factuurnr.",
    invoice_date: "Factuurdatum",
    due_date: "Vervaldatum",
    po_number: "Bestelnr.",
    bill_to: "Factuuradres",
    ship_to: "Afleveradres",
    quantity: "AANTAL",
    description: "OMSCHRIJVING",
    unit_price: "STUKPRIJS",
    amount: "BEDRAG",
    subtotal: "Subtotaal",
    tax: "BTW",
    total: "TOTAAL",
    terms_and_conditions: "Algemene Voorwaarden",
    notes: "Opmerkingen",
    payment_details: "Betalingsgegevens",
};

const RU: DocumentLabels = DocumentLabels {
    invoice: "СЧЁТ",
    invoice_number: "№ Счёта",
    invoice_date: "Дата счёта",
    due_date: "Срок оплаты",
    po_number: "№ Заказа",
    bill_to: "Плательщик",
    ship_to: "Адрес доставки",
    quantity: "КОЛ-ВО",
    description: "ОПИСАНИЕ",
    unit_price: "ЦЕНА",
    amount: "СУММА",
    subtotal: "Подытог",
    tax: "НДС",
    total: "ИТОГО",
    terms_and_conditions: "Условия",
    notes: "Примечания",
    payment_details: "Реквизиты для оплаты",
};

const AR: DocumentLabels = DocumentLabels {
    invoice: "فاتورة",
    invoice_number: "رقم الفاتورة",
    invoice_date: "تاريخ الفاتورة",
    due_date: "تاريخ الاستحقاق",
    po_number: "رقم الطلب",
    bill_to: "الفاتورة إلى",
    ship_to: "الشحن إلى",
    quantity: "الكمية",
    description: "الوصف",
    unit_price: "سعر الوحدة",
    amount: "المبلغ",
    subtotal: "المجموع الفرعي",
    tax: "الضريبة",
    total: "المجموع",
    terms_and_conditions: "الشروط والأحكام",
    notes: "ملاحظات",
    payment_details: "تفاصيل الدفع",
};

const ZH: DocumentLabels = DocumentLabels {
    invoice: "发票",
    invoice_number: "发票号",
    invoice_date: "发票日期",
    due_date: "到期日",
    po_number: "订单号",
    bill_to: "账单地址",
    ship_to: "送货地址",
    quantity: "数量",
    description: "描述",
    unit_price: "单价",
    amount: "金额",
    subtotal: "小计",
    tax: "税额",
    total: "总计",
    terms_and_conditions: "条款和条件",
    notes: "备注",
    payment_details: "付款信息",
};

const JA: DocumentLabels = DocumentLabels {
    invoice: "請求書",
    invoice_number: "請求書番号",
    invoice_date: "請求日",
    due_date: "支払期限",
    po_number: "注文番号",
    bill_to: "請求先",
    ship_to: "送付先",
    quantity: "数量",
    description: "品目",
    unit_price: "単価",
    amount: "金額",
    subtotal: "小計",
    tax: "消費税",
    total: "合計",
    terms_and_conditions: "利用規約",
    notes: "備考",
    payment_details: "お支払い情報",
};

const KO: DocumentLabels = DocumentLabels {
    invoice: "청구서",
    invoice_number: "청구서 번호",
    invoice_date: "청구일",
    due_date: "만기일",
    po_number: "주문 번호",
    bill_to: "청구지",
    ship_to: "배송지",
    quantity: "수량",
    description: "품목",
    unit_price: "단가",
    amount: "금액",
    subtotal: "소계",
    tax: "세금",
    total: "합계",
    terms_and_conditions: "이용약관",
    notes: "참고",
    payment_details: "결제 정보",
};

/// Resolves the label set for a document language.
pub const fn labels(language: DocumentLanguage) -> &'static DocumentLabels {
    match language {
        DocumentLanguage::Tr => &TR,
        DocumentLanguage::En => &EN,
        DocumentLanguage::De => &DE,
        DocumentLanguage::Fr => &FR,
        DocumentLanguage::Es => &ES,
        DocumentLanguage::It => &IT,
        DocumentLanguage::Pt => &PT,
        DocumentLanguage::Nl => &NL,
        DocumentLanguage::Ru => &RU,
        DocumentLanguage::Ar => &AR,
        DocumentLanguage::Zh => &ZH,
        DocumentLanguage::Ja => &JA,
        DocumentLanguage::Ko => &KO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_lookup() {
        assert_eq!(labels(DocumentLanguage::En).invoice, "INVOICE");
        assert_eq!(labels(DocumentLanguage::Tr).invoice, "FATURA");
        assert_eq!(labels(DocumentLanguage::De).tax, "MwSt.");
    }

    #[test]
    fn test_every_language_has_an_info_entry() {
        for lang in [
            DocumentLanguage::Tr,
            DocumentLanguage::En,
            DocumentLanguage::De,
            DocumentLanguage::Fr,
            DocumentLanguage::Es,
            DocumentLanguage::It,
            DocumentLanguage::Pt,
            DocumentLanguage::Nl,
            DocumentLanguage::Ru,
            DocumentLanguage::Ar,
            DocumentLanguage::Zh,
            DocumentLanguage::Ja,
            DocumentLanguage::Ko,
        ] {
            assert!(LANGUAGES.iter().any(|info| info.code == lang));
            // Label sets are total; a blank label would be a table bug
            assert!(!labels(lang).invoice.is_empty());
        }
    }
}
