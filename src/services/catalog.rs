// src/services/catalog.rs
//! Canned response catalog for the ten supported languages.
//!
//! All lookups resolve missing languages to English. The technical, account
//! and billing help tables are only populated for en/id/ms in the source
//! localization data; that gap is carried as-is rather than backfilled.

/// Language used when a requested code has no entry of its own.
pub const FALLBACK_LANGUAGE: &str = "en";

/// Language codes paired with native display names, served by GET /api/languages.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("id", "Bahasa Indonesia"),
    ("ms", "Bahasa Malaysia"),
    ("th", "ไทย (Thai)"),
    ("vi", "Tiếng Việt"),
    ("tl", "Filipino"),
    ("my", "မြန်မာ (Myanmar)"),
    ("km", "ខ្មែរ (Khmer)"),
    ("lo", "ລາວ (Lao)"),
    ("bn", "বাংলা (Bengali)"),
];

/// The kinds of canned message the catalog can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Greeting,
    Status,
    Appreciation,
    Goodbye,
    /// Generic "model unavailable" text, substituted when the remote
    /// completion call fails or is unconfigured.
    Fallback,
}

type Table = &'static [(&'static str, &'static str)];

// Invariant: the first entry of every table is the English fallback.
const GREETINGS: Table = &[
    ("en", "Hello! Welcome to Bantuan Support. How can I help you today?"),
    ("id", "Halo! Selamat datang di Dukungan Bantuan. Bagaimana cara saya membantu Anda hari ini?"),
    ("ms", "Halo! Selamat datang ke Sokongan Bantuan. Bagaimana saya boleh membantu anda hari ini?"),
    ("th", "สวัสดี! ยินดีต้อนรับสู่ Bantuan Support วันนี้ฉันสามารถช่วยคุณได้อย่างไร"),
    ("vi", "Xin chào! Chào mừng bạn đến với Hỗ trợ Bantuan. Tôi có thể giúp bạn như thế nào hôm nay?"),
    ("tl", "Halo! Maligayang pagdating sa Bantuan Support. Paano ko kayo matutulungan ngayong araw?"),
    ("my", "ဟယ်လို! Bantuan Support သို့ လှိုက်လှိုက်လှိုက်သည့် ကြိုဆိုပါသည်။ ယနေ့ ကျွန်ုပ်သည် သင့်အား မည်သည့်နည်းဖြင့် ကူညီပေးနိုင်သည်နည်း"),
    ("km", "សាលូប! សូមស្វាគមន៍មកយុទ្ធសាលា Bantuan Support ។ ខ្ញុំអាចជួយអ្នកដោយរបៀបណា?"),
    ("lo", "ສະ​ບາຍ​ດີ! ຍິນ​ດີ​ຕ້ອນ​ຮັບ​ເข້າ​ສູ່​ Bantuan Support ຂ້ອຍ​ສາ​ມາດ​ຊ່ວຍ​ເຫຼື້ອ​ທ່ານ​ໃນ​ວັນ​ນີ້​ໂດຍ​ວິ​ທີ​ໃດ"),
    ("bn", "হ্যালো! Bantuan সাপোর্টে স্বাগতম। আজ আমি আপনাকে কীভাবে সাহায্য করতে পারি?"),
];

const STATUS: Table = &[
    ("en", "I'm doing great, thank you for asking! I'm here and ready to assist you with any questions or support you need."),
    ("id", "Saya baik-baik saja, terima kasih sudah bertanya! Saya siap membantu Anda dengan pertanyaan atau dukungan apa pun yang Anda butuhkan."),
    ("ms", "Saya baik-baik saja, terima kasih telah bertanya! Saya siap membantu anda dengan sebarang soalan atau sokongan yang anda perlukan."),
    ("th", "ฉันสบายดี ขอบคุณที่ถาม! ฉันพร้อมที่จะช่วยเหลือคำถามหรือการสนับสนุนใด ๆ ที่คุณต้องการ"),
    ("vi", "Tôi đang khỏe, cảm ơn vì đã hỏi! Tôi sẵn sàng giúp bạn với bất kỳ câu hỏi hoặc hỗ trợ nào bạn cần."),
    ("tl", "Ako ay gumagana nang maayos, salamat sa pagtatanong! Handa akong tumulong sa iyo sa anumang katanungan o suporta na kailangan mo."),
    ("my", "ကျွန်ုပ်ကောင်းမွန်နေပါသည် မေးမြန်းပေးသည့်အတွက် ကျေးဇူးပြု၍ အမှုတင်သည်။ ကျွန်ုပ်သည် သင့်အား မည်သည့်မေးခွန်း သို့မဟုတ် အကူအညီကို ကူညီပေးရန် အသင့်ရှိပါသည်။"),
    ("km", "ខ្ញុំស្ថិតក្នុងលក្ខណៈល្អ សូមគេង! ខ្ញុំត្រៀមខ្លួនដែលក្នុងក្រោយដែលដើម្បីផ្តល់ជូនលេខយុទ្ធសាលា ឬការរទប្បិទលម្អិតដែលអ្នកត្រូវការ។"),
    ("lo", "ຂ້ອຍສະບາຍດີ ຂອບໃຈທີ່ຖາມ! ຂ້ອຍພ້ອມທີ່ຈະຊ່ວຍເຫຼື້ອທ່ານກັບໂจ့ຕໍ່າໃດຕໍ່າຫລືຄວາມຊ່ວຍເຫຼື້ອໃດທີ່ທ່ານຕ້ອງການ"),
    ("bn", "আমি ভাল আছি, আপনার জন্য ধন্যবাদ! আমি আপনার যে কোনও প্রশ্ন বা সহায়তার জন্য সাহায্য করতে প্রস্তুত।"),
];

const APPRECIATION: Table = &[
    ("en", "You're very welcome! I'm always happy to help. Is there anything else I can assist you with?"),
    ("id", "Dengan senang hati! Saya selalu senang membantu. Ada yang lain yang bisa saya bantu?"),
    ("ms", "Sama-sama! Saya selalu gembira membantu. Adakah perkara lain yang boleh saya bantu anda?"),
    ("th", "ยินดีมากครับ! ฉันยินดีที่จะช่วยเสมอ มีอะไรอื่นที่ฉันสามารถช่วยได้หรือไม่"),
    ("vi", "Không có gì! Tôi luôn vui lòng giúp đỡ. Có điều gì khác tôi có thể giúp bạn không?"),
    ("tl", "Malugod na tanggapin! Lagi akong masaya na tumulong. May iba pang alam mo na makakatulong?"),
    ("my", "များစွာ အလွမ်းမြတ်! ကျွန်ုပ်သည် အမြဲလျှင် ကူညီရန် ဝမ်းသာပါသည်။ ကျွန်ုပ်ကိုကူညီပေးနိုင်သည့် အခြားအရာများ ရှိပါသလား?"),
    ("km", "សូមស្វាគមន៍ច្រើន! ខ្ញុំពេលវេលាដែលហេមម័ត្ថ។ តើមានចាក់សក្ដនដែលទៀងទាត់ដែលខ្ញុំបង្គរលាម?"),
    ("lo", "ທ່ານໄດ້ຍິນທີ່ຮາກ! ຂ້ອຍ​ສະ​ນົ່ງ​ໆ​ດີ​ໃຈ​ທີ່​ຈະ​ຊ່ວຍ​ເຫຼື້ອ​ໃດ​ບາດ​ທີ່ອື່ນ​ທີ່ຂ້ອຍ​ສາ​ມາດ​ຊ່ວຍ​ເຫຼື້ອ​ທ່ານ​ໄດ້"),
    ("bn", "আপনার স্বাগত! আমি সর্বদা সাহায্য করতে খুশি। আর কিছু আছে যা আমি আপনাকে সাহায্য করতে পারি?"),
];

const GOODBYES: Table = &[
    ("en", "Goodbye! Thank you for using Bantuan Support. Have a great day!"),
    ("id", "Sampai jumpa! Terima kasih telah menggunakan Dukungan Bantuan. Semoga hari Anda menyenangkan!"),
    ("ms", "Selamat tinggal! Terima kasih telah menggunakan Sokongan Bantuan. Semoga anda mempunyai hari yang bagus!"),
    ("th", "ลาก่อน! ขอบคุณที่ใช้ Bantuan Support มีวันที่ดี!"),
    ("vi", "Tạm biệt! Cảm ơn bạn đã sử dụng Hỗ trợ Bantuan. Có một ngày tuyệt vời!"),
    ("tl", "Paalam! Salamat sa paggamit ng Bantuan Support. Magkaroon ng magandang araw!"),
    // The my/km/lo strings below match the upstream localization data,
    // including its defects (the Burmese entry opens with Japanese).
    ("my", "さようなら ကျွန်ုပ်သည် Bantuan Support ကိုအသုံးပြု၍ ကျေးဇူးပြု၍ မည်သည့်ကုန်ကျုံရေသည့် သည့် အခြားက္တ"),
    ("km", "សារលាដ! សូមស្វាគមន៍សម្រាប់ការប្រើប្រាស់ Bantuan Support ។ មានថ្ងៃដ៏ល្អ!"),
    ("lo", "ສະ​ບາຍ​ດີ​ ຂອບ​ໃຈ​ທີ່​ໃຊ້ Bantuan Support ມີ​ວັນ​ທີ່ ທີ່ດີ!"),
    ("bn", "বিদায়! Bantuan সাপোর্ট ব্যবহার করার জন্য আপনাকে ধন্যবাদ। দুর্দান্ত দিন থাকুক!"),
];

const FALLBACKS: Table = &[
    ("en", "I apologize, but I'm currently unable to process your request through AI Foundry. Please try again later or contact support."),
    ("id", "Saya minta maaf, tetapi saya saat ini tidak dapat memproses permintaan Anda melalui AI Foundry. Silakan coba lagi nanti atau hubungi dukungan."),
    ("ms", "Saya minta maaf, tetapi saya saat ini tidak dapat memproses permintaan anda melalui AI Foundry. Sila cuba lagi nanti atau hubungi sokongan."),
    ("th", "ขอโทษ แต่ฉันไม่สามารถประมวลผลคำขอของคุณผ่าน AI Foundry ได้ในขณะนี้ โปรดลองใหม่ภายหลังหรือติดต่อการสนับสนุน"),
    ("vi", "Tôi xin lỗi, nhưng hiện tại tôi không thể xử lý yêu cầu của bạn qua AI Foundry. Vui lòng thử lại sau hoặc liên hệ với bộ phận hỗ trợ."),
    ("tl", "Humingi ako ng patawad, ngunit hindi ko makakagawa ang iyong kahilingan sa pamamagitan ng AI Foundry sa kasalukuyan. Mangyaring subukan ulit mamaya o makipag-ugnayan sa suporta."),
    ("my", "ကျွန်ုပ်သည် နှိမ့်ချပြန်လည်တောင်းခံပါသည်။ သို့သော်ကျွန်ုပ်သည် လက်ရှိတွင် AI Foundry မှတစ်ဆင့် သင့်အမေးခွန်းကို ပြုပြင်နိုင်မည်မဟုတ်ပါ။ နောက်ပိုင်းတွင် ထပ်မံစာကြောင်းသို့မဟုတ် ကျေးဇူးပြုတောင်းခံပါ။"),
    ("km", "សូមលាង ប៉ុន្តែខ្ញុំមិនអាចដំណើរការសូលិចរបស់អ្នកតាមរយៈ AI Foundry បានទេ។ សូមព្យាយាមម្តងទៀតក្រោយមក ឬទាក់ទងការគាំទ។"),
    ("lo", "ຂ້ອຍຂໍໂທດ, ແຕ່ຂ້ອຍບໍ່ສາມາດປະມວນຜົນຂໍ້ຮ້ອງຂໍຂອງທ່ານຜ່ານ AI Foundry ໄດ້ໃນປະຈຸບັນ. ກະລຸນາລອງໃຫມ່ກໍ່ຕໍ່ໄປ ຫລື ຕິດຕໍ່ສະ ບປ."),
    ("bn", "আমি ক্ষমা চাইছি, কিন্তু আমি এখন AI Foundry এর মাধ্যমে আপনার অনুরোধ প্রক্রিয়া করতে পারছি না। অনুগ্রহ করে পরে আবার চেষ্টা করুন বা সহায়তার সাথে যোগাযোগ করুন।"),
];

// Category help tables. technical/account/billing only exist in en/id/ms.
const HELP_TECHNICAL: Table = &[
    ("en", "I can help with technical issues! Please describe the problem you're experiencing, and I'll do my best to assist you."),
    ("id", "Saya dapat membantu dengan masalah teknis! Silakan jelaskan masalah yang Anda alami, dan saya akan membantu Anda."),
    ("ms", "Saya boleh membantu dengan masalah teknis! Sila terangkan masalah yang anda hadapi, dan saya akan membantu anda."),
];

const HELP_ACCOUNT: Table = &[
    ("en", "I can help with account-related questions! What would you like to know about your account?"),
    ("id", "Saya dapat membantu dengan pertanyaan terkait akun! Apa yang ingin Anda ketahui tentang akun Anda?"),
    ("ms", "Saya boleh membantu dengan soalan berkaitan akaun! Apa yang anda ingin tahu tentang akaun anda?"),
];

const HELP_BILLING: Table = &[
    ("en", "I can assist with billing inquiries! Please let me know what information you need about your billing."),
    ("id", "Saya dapat membantu dengan pertanyaan tagihan! Beri tahu saya informasi apa yang Anda butuhkan tentang penagihan Anda."),
    ("ms", "Saya boleh membantu dengan pertanyaan pengebilan! Beritahu saya maklumat apa yang anda perlukan tentang pengebilan anda."),
];

const HELP_GENERAL: Table = &[
    ("en", "I'm here to help! Please tell me what you need assistance with, and I'll do my best to support you."),
    ("id", "Saya siap membantu! Beri tahu saya apa yang Anda butuhkan, dan saya akan melakukan yang terbaik untuk membantu Anda."),
    ("ms", "Saya siap membantu! Beritahu saya apa yang anda perlukan, dan saya akan berusaha sebaik mungkin untuk membantu anda."),
];

const CATEGORY_TECHNICAL: Table = &[
    ("en", "Thank you for reporting this technical issue: '{message}...'. I'm analyzing your request and will provide troubleshooting steps shortly. Please describe any error messages you see."),
    ("id", "Terima kasih telah melaporkan masalah teknis ini: '{message}...'. Saya menganalisis permintaan Anda dan akan memberikan langkah pemecahan masalah segera. Harap jelaskan pesan kesalahan apa pun yang Anda lihat."),
    ("ms", "Terima kasih telah melaporkan masalah teknis ini: '{message}...'. Saya menganalisis permintaan anda dan akan memberikan langkah penyelesaian masalah tidak lama lagi. Sila terangkan sebarang mesej ralat yang anda lihat."),
];

const CATEGORY_ACCOUNT: Table = &[
    ("en", "Regarding your account inquiry: '{message}...'. I can help you with account settings, profile information, and related matters. What specific information do you need?"),
    ("id", "Mengenai pertanyaan akun Anda: '{message}...'. Saya dapat membantu Anda dengan pengaturan akun, informasi profil, dan hal-hal terkait. Informasi spesifik apa yang Anda butuhkan?"),
    ("ms", "Mengenai pertanyaan akaun anda: '{message}...'. Saya boleh membantu anda dengan tetapan akaun, maklumat profil, dan perkara berkaitan. Maklumat khusus apa yang anda perlukan?"),
];

const CATEGORY_BILLING: Table = &[
    ("en", "Regarding your billing question: '{message}...'. I can assist with invoice details, payment methods, subscription plans, and billing inquiries. How can I help?"),
    ("id", "Mengenai pertanyaan penagihan Anda: '{message}...'. Saya dapat membantu dengan detail faktur, metode pembayaran, rencana langganan, dan pertanyaan penagihan. Bagaimana saya bisa membantu?"),
    ("ms", "Mengenai soalan pengebilan anda: '{message}...'. Saya boleh membantu dengan butiran invois, kaedah pembayaran, pelan langganan, dan pertanyaan pengebilan. Bagaimana saya boleh membantu?"),
];

const CATEGORY_GENERAL: Table = &[
    ("en", "Thank you for your message: '{message}...'. I'm here to assist you. Could you provide more details about what you need help with?"),
    ("id", "Terima kasih atas pesan Anda: '{message}...'. Saya siap membantu Anda. Bisakah Anda memberikan lebih detail tentang apa yang Anda butuhkan?"),
    ("ms", "Terima kasih atas mesej anda: '{message}...'. Saya siap membantu anda. Bolehkah anda memberikan lebih banyak butiran tentang apa yang anda perlukan?"),
    ("th", "ขอบคุณสำหรับข้อความของคุณ: '{message}...' ฉันพร้อมที่จะช่วยเหลือคุณ คุณสามารถให้รายละเอียดเพิ่มเติมเกี่ยวกับสิ่งที่คุณต้องการได้หรือไม่"),
    ("vi", "Cảm ơn bạn về tin nhắn của bạn: '{message}...'. Tôi sẵn sàng giúp bạn. Bạn có thể cung cấp thêm chi tiết về những gì bạn cần giúp không?"),
    ("tl", "Salamat sa iyong mensahe: '{message}...'. Ako ay handa na tumulong sa iyo. Mayroon kang magbigay ng higit pang detalye tungkol sa kung ano ang kailangan mo ng tulong?"),
    ("my", "သင့်အမေးခွန်းအတွက် ကျေးဇူးပြု၍ '{message}...'. ကျွန်ုပ်သည် သင့်အား ကူညီရန် အသင့်ရှိပါသည်။ သင်မည်သည့်အရာ လိုအပ်သည်နှင့်ပတ်သက်။ သက်သက်ပိုမိုအသေးစိတ်ကို ပေးနိုင်ပါသလား?"),
    ("km", "សូមស្វាគមន៍សម្រាប់សារ: '{message}...'. ខ្ញុំនឹងផ្តល់ជូនលេខយុទ្ធសាលា តើអ្នកនិយាយថាលម្អិតលម្អិតដែលបន្ថែមផ្សេងទៀតអំពីអ្វីដែលអ្នកត្រូវការលេខយុទ្ធសាលា?"),
    ("lo", "ຂອບໃຈສໍາລັບຂໍ້ຄວາມຂອງທ່ານ: '{message}...'. ຂ້ອຍພ້ອມທີ່ຈະຊ່ວຍເຫຼື້ອທ່ານ ທ່ານສາມາດໃຫ້ລາຍລະອຽດເພີ່ມເຕີມກ່ຽວກັບສິ່ງທີ່ທ່ານຕ້ອງການຄວາມຊ່ວຍເຫຼື້ອໃດ"),
    ("bn", "আপনার বার্তার জন্য ধন্যবাদ: '{message}...' আমি আপনাকে সাহায্য করতে প্রস্তুত। আপনি কী সাহায্যের প্রয়োজন সে সম্পর্কে আরও বিশদ তথ্য দিতে পারেন?"),
];

fn table(kind: MessageKind) -> Table {
    match kind {
        MessageKind::Greeting => GREETINGS,
        MessageKind::Status => STATUS,
        MessageKind::Appreciation => APPRECIATION,
        MessageKind::Goodbye => GOODBYES,
        MessageKind::Fallback => FALLBACKS,
    }
}

fn resolve(t: Table, language: &str) -> &'static str {
    t.iter()
        .find(|(code, _)| *code == language)
        .map(|(_, text)| *text)
        // First entry is always English.
        .unwrap_or(t[0].1)
}

/// Canned text for `kind` in `language`, falling back to English for
/// languages the table does not carry.
pub fn canned(kind: MessageKind, language: &str) -> &'static str {
    resolve(table(kind), language)
}

/// Category help text. Categories outside technical/account/billing are
/// coerced to general before lookup.
pub fn help_response(category: &str, language: &str) -> &'static str {
    let t = match category {
        "technical" => HELP_TECHNICAL,
        "account" => HELP_ACCOUNT,
        "billing" => HELP_BILLING,
        _ => HELP_GENERAL,
    };
    resolve(t, language)
}

/// Category acknowledgement quoting the start of the user message, in the
/// source's `'<prefix>...'` form. Same coercion and language fallback rules
/// as `help_response`; only the general table is fully translated.
pub fn category_response(category: &str, message: &str, language: &str) -> String {
    let t = match category {
        "technical" => CATEGORY_TECHNICAL,
        "account" => CATEGORY_ACCOUNT,
        "billing" => CATEGORY_BILLING,
        _ => CATEGORY_GENERAL,
    };
    let prefix: String = message.chars().take(50).collect();
    resolve(t, language).replace("{message}", &prefix)
}

/// Codes of every supported language, in catalog order.
pub fn language_codes() -> Vec<&'static str> {
    SUPPORTED_LANGUAGES.iter().map(|(code, _)| *code).collect()
}
