//! User-facing message texts.

use reg_core::Registration;

pub const WELCOME: &str = "Growz tomonidan qishloq xo'jaligi sohasida yaqin kunlarda maxsus uchrashuv va amaliy tadbirlar \
tashkil etilishi rejalashtirilmoqda.\n\
Ushbu tadbirlar:\n\
• fermerlar va eksportyorlar uchun\n\
• amaliy bilim va tajriba almashish uchun\n\
• yangi imkoniyatlar va hamkorliklar uchun mo‘ljallangan\n\n\
Hozirda qaysi hududlardan fermerlar qiziqish bildirayotganini aniqlayapmiz.\n\
Agar ishtirok etishni istasangiz, qisqa ma’lumot qoldiring.";

pub const CONFIRMED: &str = "Rahmat!\n\
Ma’lumotlaringiz qabul qilindi.\n\
Yaqin kunlarda Growz tomonidan tashkil etiladigan tadbirlar bo‘yicha siz bilan bog‘lanamiz.";

pub const ALREADY_REGISTERED_START: &str = "✅ Siz allaqachon ro‘yxatdan o‘tgansiz.\n\n\
Quyidagi tugmalar orqali ma’lumotlaringizni ko‘rishingiz mumkin.";

pub const ALREADY_REGISTERED_JOIN: &str = "✅ Siz allaqachon ro‘yxatdan o‘tgansiz.\n\
Qayta ro‘yxatdan o‘tish mumkin emas.\n\n\
📄 Ma’lumotlarim tugmasini bosing.";

pub const ALREADY_REGISTERED: &str =
    "✅ Siz allaqachon ro‘yxatdan o‘tgansiz.\n📄 Ma’lumotlarim tugmasini bosing.";

pub const ASK_NAME: &str = "Iltimos, ism va familiyangizni kiriting.\nMasalan: Aliyev Sardor";

pub const INVALID_NAME: &str = "❌ Ism va familiya kamida 2 ta so‘z bo‘lishi kerak.\n\
Masalan: Aliyev Sardor\n\nQaytadan kiriting:";

pub const ASK_PHONE: &str = "Bog‘lanish uchun telefon raqamingizni yuboring.\n\
Pastdagi tugma orqali yuboring 👇";

pub const PHONE_VIA_BUTTON: &str =
    "❌ Iltimos, telefon raqamingizni *faqat tugma orqali* yuboring 👇";

pub const FOREIGN_CONTACT: &str = "❌ Iltimos, *o‘zingizning* telefon raqamingizni yuboring 👇";

pub const PHONE_UNREADABLE: &str = "❌ Telefon raqam aniqlanmadi. Qaytadan yuboring 👇";

pub const PHONE_ALREADY_USED: &str = "❌ Ushbu telefon raqam bilan avval ro‘yxatdan o‘tilgan.\n\
Qayta ro‘yxatdan o‘tish mumkin emas.\n\n\
Agar bu xato bo‘lsa, admin bilan bog‘laning.";

pub const ASK_REGION: &str =
    "Qaysi viloyatdan ishtirok etmoqchisiz?\nQuyidagi ro‘yxatdan tanlang 👇";

pub const INVALID_REGION: &str = "❌ Iltimos, viloyatni *faqat ro‘yxatdan* tanlang 👇";

pub const CANCELLED: &str = "✅ Bekor qilindi.\nQayta boshlash uchun /start bosing.";

pub const NOT_REGISTERED: &str = "❌ Siz hali ro‘yxatdan o‘tmagansiz.\n/start bosing.";

pub const HELP: &str = "ℹ️ Yordam:\n\
• Ro‘yxatdan o‘tish uchun /start yoki 👉 Ishtirok etmoqchiman tugmasi.\n\
• Jarayonni bekor qilish: /cancel\n\
• Ro‘yxatdan o‘tgan bo‘lsangiz, 📄 Ma’lumotlarim tugmasi orqali tekshiring.";

pub const UNAUTHORIZED: &str = "❌ Sizda admin huquqi yo‘q.";

pub const LIST_EMPTY: &str = "Hozircha ro‘yxat bo‘sh.";

pub const EXPORT_CAPTION: &str = "✅ Registrations CSV (Excel’da ham ochiladi).";

pub const EXPORT_FAILED: &str = "❌ Export xato. Keyinroq qayta urinib ko‘ring.";

pub const FAILURE: &str = "❌ Xatolik yuz berdi. Iltimos, keyinroq qayta urinib ko‘ring.";

pub const HINT_REGISTERED: &str = "✅ Siz allaqachon ro‘yxatdan o‘tgansiz.\n\
📄 Ma’lumotlarim tugmasini bosing yoki /start yuboring.";

pub const HINT_START: &str =
    "Ro‘yxatdan o‘tish uchun /start bosing yoki 👉 Ishtirok etmoqchiman tugmasini bosing.";

/// Escape Markdown control characters in user-supplied values
pub fn escape_markdown(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '_' | '*' | '`' | '[') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

pub fn my_info(registration: &Registration) -> String {
    format!(
        "📄 *Sizning ma’lumotlaringiz:*\n\
         • Ism-familiya: *{}*\n\
         • Telefon: *{}*\n\
         • Viloyat: *{}*\n\
         • Sana: *{}*",
        escape_markdown(&registration.full_name),
        escape_markdown(&registration.phone),
        escape_markdown(registration.region.as_str()),
        registration.registered_at_display(),
    )
}

pub fn recent_list(registrations: &[Registration]) -> String {
    let mut text = format!(
        "📋 *Oxirgi {} ta ro‘yxatdan o‘tganlar:*\n\n",
        registrations.len()
    );
    for (i, r) in registrations.iter().enumerate() {
        text.push_str(&format!(
            "{}) *{}*\n   📞 {}\n   📍 {}\n   🕒 {}\n\n",
            i + 1,
            escape_markdown(&r.full_name),
            escape_markdown(&r.phone),
            escape_markdown(r.region.as_str()),
            r.registered_at_display(),
        ));
    }
    text
}
