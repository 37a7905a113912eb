//! Built-in seed strata, in enumeration order.

pub struct SeedStratum {
    pub name: &'static str,
    pub domains: &'static [&'static str],
}

pub const BUILTIN_STRATA: &[SeedStratum] = &[
    SeedStratum {
        name: "GOV",
        domains: &[
            "opm.go.th", "mdes.go.th", "moph.go.th", "mof.go.th", "mfa.go.th", "moi.go.th",
            "moc.go.th", "mot.go.th", "moac.go.th", "moe.go.th", "m-society.go.th", "justice.go.th",
            "mnre.go.th", "industry.go.th", "m-culture.go.th", "labour.go.th", "rd.go.th",
            "customs.go.th", "excise.go.th", "dlt.go.th", "dopa.go.th", "dbd.go.th", "dsi.go.th",
            "prd.go.th", "ocsc.go.th", "parliament.go.th", "senate.go.th", "nacc.go.th",
            "nbtc.go.th", "etda.or.th", "depa.or.th", "dga.or.th", "tmd.go.th", "nso.go.th",
            "ddpm.go.th", "doeb.go.th", "doae.go.th", "dld.go.th", "fisheries.go.th", "opdc.go.th",
            "boi.go.th", "ratchakitcha.soc.go.th", "oic.or.th", "dms.moph.go.th", "ddc.moph.go.th",
            "dtam.moph.go.th", "dmsc.moph.go.th", "hss.moph.go.th", "anamai.moph.go.th",
            "fda.moph.go.th",
        ],
    },
    SeedStratum {
        name: "EDU",
        domains: &[
            "chula.ac.th", "mahidol.ac.th", "ku.ac.th", "tu.ac.th", "cmu.ac.th", "kku.ac.th",
            "psu.ac.th", "kmitl.ac.th", "kmutt.ac.th", "kmutnb.ac.th", "su.ac.th", "swu.ac.th",
            "nida.ac.th", "burapha.ac.th", "nu.ac.th", "wu.ac.th", "mju.ac.th", "msu.ac.th",
            "ubu.ac.th", "payap.ac.th", "utcc.ac.th", "tni.ac.th", "pim.ac.th", "bu.ac.th",
            "au.edu", "rangsit.edu", "dpu.ac.th", "stamford.edu", "ru.ac.th", "mcu.ac.th",
            "mfu.ac.th", "sut.ac.th", "rmutl.ac.th", "rmuti.ac.th", "rmutp.ac.th", "rmutk.ac.th",
            "rmutr.ac.th", "rmutto.ac.th", "rmutb.ac.th", "rmutst.ac.th", "ssru.ac.th",
            "sdru.ac.th", "nrru.ac.th", "snru.ac.th", "nstru.ac.th", "pbru.ac.th", "ubru.ac.th",
            "yru.ac.th", "crru.ac.th", "lpru.ac.th",
        ],
    },
    SeedStratum {
        name: "FIN",
        domains: &[
            "scb.co.th", "scbx.com", "kbank.co.th", "bangkokbank.com", "krungthai.com",
            "krungsri.com", "ttb.co.th", "uob.co.th", "cimbthai.com", "tisco.co.th", "kkpfg.com",
            "lhbank.co.th", "icbc.co.th", "standardchartered.co.th", "thaicreditbank.com",
            "baac.or.th", "gsb.or.th", "exim.go.th", "ghbank.co.th", "smebank.co.th", "set.or.th",
            "settrade.com", "tfex.co.th", "aimc.or.th", "thaibma.or.th", "bualuang.co.th",
            "phillip.co.th", "yuanta.co.th", "finansia.com", "asiawealth.co.th", "innovestx.co.th",
            "scbam.com", "ktam.co.th", "bblam.co.th", "principal.co.th", "eastspring.co.th",
            "uobam.co.th", "aia.co.th", "muangthai.co.th", "thai-life.com", "krungthai-axa.co.th",
            "allianz.co.th", "generali.co.th", "bangkokinsurance.com", "viriyah.co.th",
            "dhipaya.co.th", "tqm.co.th", "tipinsure.com", "thaiins.com", "tli.co.th",
        ],
    },
    SeedStratum {
        name: "HEALTH",
        domains: &[
            "bumrungrad.com", "bangkokhospital.com", "samitivejhospitals.com", "phyathai.com",
            "bnhhospital.com", "vibhavadi.com", "praram9.com", "paolohospital.com",
            "thonburihospital.com", "medparkhospital.com", "vejthani.com", "rutnin.com",
            "yanhee.net", "missionhospital.org", "camillianhospital.org", "saintlouis.or.th",
            "sikarin.com", "nakornthon.com", "piyavate.com", "wattanosoth.com",
            "bangpakokhospital.com", "chularat.com", "kasemrad.co.th", "bch.in.th", "bdms.co.th",
            "thg.co.th", "rajavithi.go.th", "sirirajhospital.org", "rama.mahidol.ac.th",
            "ramathibodi.mahidol.ac.th", "med.cmu.ac.th", "med.psu.ac.th", "med.kku.ac.th",
            "med.tu.ac.th", "sirirajpiyamaharajkarun.com", "theptarin.com", "ramkhamhaeng.co.th",
            "bangmodhospital.com", "synphaet.co.th", "thainakarin.co.th", "pharmacycouncil.org",
            "thaimedicalcouncil.org", "ha.or.th", "hsri.or.th", "gpo.or.th", "boots.co.th",
            "watsons.co.th", "fascino.co.th", "hdmall.co.th", "doctorraksa.com",
        ],
    },
    SeedStratum {
        name: "TELCO_UTIL",
        domains: &[
            "ais.co.th", "ais.th", "dtac.co.th", "truecorp.co.th", "trueinternet.co.th",
            "truevisions.co.th", "3bb.co.th", "ntplc.co.th", "tot.co.th", "cattelecom.com",
            "inet.co.th", "sinet.co.th", "csloxinfo.com", "uih.co.th", "jasmine.com",
            "samarttel.com", "thaicom.net", "aisfibre3.com", "pea.co.th", "mea.or.th", "egat.co.th",
            "erc.or.th", "pwa.co.th", "mwa.co.th", "pttplc.com", "pttep.com", "bgrimm.com",
            "gulf.co.th", "ea.co.th", "banpu.com", "gpscgroup.com", "ratch.co.th", "egco.com",
            "bcpg.co.th", "irpc.co.th", "bts.co.th", "btsgroup.co.th", "bemplc.co.th", "mrta.co.th",
            "bmta.co.th", "railway.co.th", "port.co.th", "expressway.co.th", "tollway.co.th",
            "dmt.co.th", "speedtest.net", "fast.com",
        ],
    },
    SeedStratum {
        name: "NEWS_MEDIA",
        domains: &[
            "thairath.co.th", "matichon.co.th", "khaosod.co.th", "dailynews.co.th",
            "bangkokpost.com", "nationthailand.com", "prachachat.net", "thansettakij.com",
            "mgronline.com", "siamrath.co.th", "komchadluek.net", "naewna.com", "thaipost.net",
            "posttoday.com", "thethaiger.com", "thaipbs.or.th", "pptvhd36.com", "amarintv.com",
            "tnnthailand.com", "workpointtoday.com", "workpointtv.com", "ch3thailand.com",
            "ch7.com", "one31.net", "mononews.com", "tna.mcot.net", "mcot.net", "springnews.co.th",
            "voicetv.co.th", "thestandard.co", "today.line.me", "sanook.com", "kapook.com",
            "trueid.net", "beartai.com", "dek-d.com", "pantip.com", "topnews.co.th", "isranews.org",
            "bangkokbiznews.com", "brandinside.asia", "techsauce.co", "droidsans.com",
            "thisrupt.co", "themomentum.co", "thestandardwealth.com", "siamzone.com", "thaich8.com",
            "news1005.fm", "innews.news",
        ],
    },
    SeedStratum {
        name: "ECOM_RETAIL",
        domains: &[
            "shopee.co.th", "lazada.co.th", "jd.co.th", "central.co.th", "powerbuy.co.th",
            "tops.co.th", "bigc.co.th", "lotuss.com", "makro.pro", "homepro.co.th",
            "globalhouse.co.th", "thaiwatsadu.com", "indexlivingmall.com", "sbdesignsquare.com",
            "bananait.co.th", "advice.co.th", "itcityonline.com", "nocnoc.com", "konvy.com",
            "jib.co.th", "officemate.co.th", "b2s.co.th", "kingpower.com",
            "allonline.7eleven.co.th", "7eleven.co.th", "foodpanda.co.th", "grab.com",
            "lineman.wongnai.com", "wongnai.com", "robinhood.co.th", "gojek.com", "hungryhub.com",
            "makroclick.com", "kaidee.com", "tarad.com", "priceza.com", "pomelofashion.com",
            "aliexpress.com", "amazon.com", "ebay.com", "etsy.com", "supersports.co.th",
            "centralgroup.com", "decathlon.co.th", "ikea.com/th", "sephora.co.th", "unilever.co.th",
            "nestle.co.th", "apple.com/th",
        ],
    },
    SeedStratum {
        name: "TRAVEL_SERVICES",
        domains: &[
            "tourismthailand.org", "airportthai.co.th", "suvarnabhumiairport.com",
            "donmueangairport.com", "transport.co.th", "railway.co.th", "thaiairways.com",
            "bangkokair.com", "nokair.com", "airasia.com", "lionairthai.com", "vietjetair.com",
            "qatarairways.com", "singaporeair.com", "emirates.com", "cathaypacific.com",
            "agoda.com", "booking.com", "trip.com", "traveloka.com", "klook.com", "airbnb.com",
            "skyscanner.net", "expedia.com", "getyourguide.com", "flightradar24.com",
            "centarahotelsresorts.com", "dusit.com", "minorhotels.com", "onyx-hospitality.com",
            "anantara.com", "avani.com", "marriott.com", "hilton.com", "ihg.com", "accor.com",
            "lomprayah.com", "seatranferry.com", "phuketferry.com", "12go.asia", "thairentacar.com",
            "avisthailand.com", "budget.co.th", "airportels.asia",
        ],
    },
];
